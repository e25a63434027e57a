/// 修飾名パーサーのテスト
///
/// このテストは、スキーマ修飾・クォートされた識別子文字列が
/// スキーマと識別子に正しく分解されることを確認します。

#[cfg(test)]
mod name_parser_tests {
    use relname::core::error::NameError;
    use relname::core::qualified_name::QualifiedName;
    use relname::services::name_parser::{extract_schema_qualified_name, quote_table_name};

    fn double_quote(ident: &str) -> String {
        format!("\"{}\"", ident)
    }

    /// 区切り文字を含まない単一トークンは識別子のみになることを確認
    #[test]
    fn test_plain_tokens_are_unqualified() {
        for raw in ["users", "table_name", "Users2", "日本語テーブル", "a-b-c", "x"] {
            let name = extract_schema_qualified_name(raw).unwrap();
            assert_eq!(name.identifier(), raw);
            assert_eq!(name.schema(), None);
            // 単一トークンはプレーン表記で元に戻る
            assert_eq!(name.to_string(), raw);
        }
    }

    /// `a.b` がスキーマ a と識別子 b に分解されることを確認
    #[test]
    fn test_dotted_pair_is_schema_and_identifier() {
        let pairs = [("public", "users"), ("schema_name", "table_name"), ("s1", "t1")];
        for (schema, identifier) in pairs {
            let raw = format!("{}.{}", schema, identifier);
            let name = extract_schema_qualified_name(&raw).unwrap();
            assert_eq!(name.schema(), Some(schema));
            assert_eq!(name.identifier(), identifier);
        }
    }

    /// クォート内のドットは区切り文字として扱われないことを確認
    #[test]
    fn test_dot_inside_quotes_is_preserved() {
        for inner in ["table.name", "a.b.c", ".", "trailing."] {
            let raw = format!("\"{}\"", inner);
            let name = extract_schema_qualified_name(&raw).unwrap();
            assert_eq!(name.identifier(), inner);
            assert_eq!(name.schema(), None);
        }
    }

    /// "schema.name"."table name" のシナリオ
    #[test]
    fn test_quoted_schema_and_quoted_identifier() {
        let name = extract_schema_qualified_name(r#""schema.name"."table name""#).unwrap();
        assert_eq!(name.schema(), Some("schema.name"));
        assert_eq!(name.identifier(), "table name");
        assert_eq!(name.to_string(), "schema.name.table name");
    }

    /// schema_name."table.name" のシナリオ
    #[test]
    fn test_unquoted_schema_and_quoted_identifier() {
        let name = extract_schema_qualified_name(r#"schema_name."table.name""#).unwrap();
        assert_eq!(name.schema(), Some("schema_name"));
        assert_eq!(name.identifier(), "table.name");
    }

    /// トークン間の空白は境界として扱われることを確認
    #[test]
    fn test_whitespace_is_token_boundary() {
        let name = extract_schema_qualified_name("  public .\tusers \n").unwrap();
        assert_eq!(name.schema(), Some("public"));
        assert_eq!(name.identifier(), "users");

        let name = extract_schema_qualified_name("public users").unwrap();
        assert_eq!(name.schema(), Some("public"));
        assert_eq!(name.identifier(), "users");
    }

    /// 3つ目以降のトークンは無視されることを確認
    #[test]
    fn test_tokens_beyond_second_are_discarded() {
        let name = extract_schema_qualified_name(r#"a."b".c.d"#).unwrap();
        assert_eq!(name, QualifiedName::new(Some("a"), "b"));
    }

    /// トークンが1つも無い入力はエラーになることを確認
    #[test]
    fn test_no_tokens_is_ambiguous_input() {
        let result = extract_schema_qualified_name(" .. ");
        assert_eq!(
            result.unwrap_err(),
            NameError::AmbiguousInput {
                input: " .. ".to_string()
            }
        );
    }

    /// quote_table_name がクォート関数を各構成要素に適用することを確認
    #[test]
    fn test_quote_table_name() {
        assert_eq!(
            quote_table_name("t", &double_quote).unwrap(),
            r#""t""#
        );
        assert_eq!(
            quote_table_name("s.t", &double_quote).unwrap(),
            r#""s"."t""#
        );
        // 既にクォートされた入力は二重にクォートされない
        assert_eq!(
            quote_table_name(r#""s"."t""#, &double_quote).unwrap(),
            r#""s"."t""#
        );
    }
}
