#[cfg(test)]
mod rendering_tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use crate::{Node, NodeKind, Render, Unparser};

    fn tree(value: Value) -> Node {
        serde_json::from_value(value).expect("test tree should decode")
    }

    fn ident(name: &str) -> Value {
        json!({ "kind": "RAW_IDENTIFIER", "text": name })
    }

    fn declarator(name: &str) -> Value {
        json!({ "kind": "DECLARATOR", "children": [ident(name)] })
    }

    fn int_declaration(name: &str) -> Value {
        json!({
            "kind": "DECLARATION",
            "children": [
                { "kind": "INT" },
                { "kind": "DECLARATOR_LIST", "children": [declarator(name)] }
            ]
        })
    }

    fn line(file_name: &str) -> Value {
        json!({
            "kind": "LINE_DIRECTIVE",
            "children": [
                { "kind": "STRING_LITERAL", "text": file_name },
                { "kind": "CONSTANT", "text": "1" }
            ]
        })
    }

    fn function(name: &str, body: Vec<Value>) -> Value {
        json!({
            "kind": "DECLARATION",
            "children": [{
                "kind": "FUNCTION_DEFINITION",
                "children": [
                    { "kind": "VOID" },
                    {
                        "kind": "DECLARATOR",
                        "children": [
                            ident(name),
                            {
                                "kind": "DECLARATOR_PARAMETER_LIST_MODIFIER",
                                "children": [{
                                    "kind": "PARAMETER_LIST",
                                    "children": [{ "kind": "PARAMETER", "children": [{ "kind": "VOID" }] }]
                                }]
                            }
                        ]
                    },
                    { "kind": "COMPOUND_STATEMENT", "children": body }
                ]
            }]
        })
    }

    #[test]
    fn test_declaration_semicolon_depends_on_function_definition() {
        let variable = tree(int_declaration("count"));
        let function = tree(function("start", vec![]));

        let variable_text = variable.render_source().unwrap();
        let function_text = function.render_source().unwrap();

        assert!(variable_text.trim_end().ends_with(';'));
        assert!(!function_text.trim_end().ends_with(';'));
    }

    #[test]
    fn test_statement_in_function_body() {
        let assignment = json!({
            "kind": "STATEMENT",
            "children": [{
                "kind": "ASSIGN",
                "children": [
                    ident("x"),
                    {
                        "kind": "STAR",
                        "children": [
                            ident("a"),
                            { "kind": "PLUS", "children": [ident("b"), ident("c")] }
                        ]
                    }
                ]
            }]
        });
        let output = tree(function("f", vec![assignment])).render_source().unwrap();
        assert_eq!(
            output,
            "void f  ( void  ) \n{\n    x  = ( a  * ( b  + c  ) );\n}\n\n\n"
        );
    }

    #[test]
    fn test_function_pointer_parameter_is_not_parenthesized() {
        let declaration = tree(json!({
            "kind": "DECLARATION",
            "children": [
                { "kind": "INT" },
                {
                    "kind": "DECLARATOR_LIST",
                    "children": [{
                        "kind": "DECLARATOR",
                        "children": [
                            {
                                "kind": "DECLARATOR",
                                "children": [{ "kind": "POINTER_QUALIFIER" }, ident("p")]
                            },
                            {
                                "kind": "DECLARATOR_PARAMETER_LIST_MODIFIER",
                                "children": [{
                                    "kind": "PARAMETER_LIST",
                                    "children": [{
                                        "kind": "PARAMETER",
                                        "children": [{ "kind": "INT" }, declarator("x")]
                                    }]
                                }]
                            }
                        ]
                    }]
                }
            ]
        }));
        assert_eq!(
            declaration.render_source().unwrap(),
            "int (* p  ) ( int x   ) ;\n\n"
        );
    }

    #[test]
    fn test_header_region_is_suppressed() {
        let file = tree(json!({
            "kind": "FILE",
            "children": [
                line("\"BlinkC.nc\""),
                line("\"C:\\\\tinyos\\\\Timer.h\""),
                int_declaration("a"),
                int_declaration("b"),
                int_declaration("c"),
                line("\"BlinkC.nc\""),
                int_declaration("visible")
            ]
        }));
        let output = file.render_source().unwrap();

        assert_eq!(output, "#include \"C:/tinyos/Timer.h\"\nint visible  ;\n\n");
        assert_eq!(output.matches("#include").count(), 1);
    }

    #[test]
    fn test_header_region_inside_implementation() {
        let implementation = tree(json!({
            "kind": "IMPLEMENTATION",
            "children": [
                line("<message.h>"),
                int_declaration("hidden"),
                line("\"BlinkC.nc\""),
                int_declaration("shown")
            ]
        }));
        assert_eq!(
            implementation.render_source().unwrap(),
            "implementation {\n#include <message.h>\n    int shown  ;\n}\n\n"
        );
    }

    #[test]
    fn test_configuration() {
        let file = tree(json!({
            "kind": "FILE",
            "children": [
                line("\"BlinkAppC.nc\""),
                {
                    "kind": "COMPONENT_DEFINITION",
                    "children": [
                        { "kind": "COMPONENT_KIND", "children": [{ "kind": "CONFIGURATION" }] },
                        ident("BlinkAppC"),
                        { "kind": "SPECIFICATION" },
                        {
                            "kind": "IMPLEMENTATION",
                            "children": [
                                {
                                    "kind": "COMPONENTS",
                                    "children": [
                                        { "kind": "COMPONENT_DECLARATION", "children": [ident("MainC")] },
                                        { "kind": "COMPONENT_DECLARATION", "children": [ident("BlinkC")] }
                                    ]
                                },
                                {
                                    "kind": "CONNECTION",
                                    "children": [
                                        {
                                            "kind": "ARROW",
                                            "text": "->",
                                            "children": [{ "kind": "IDENTIFIER_PATH", "children": [ident("MainC")] }]
                                        },
                                        { "kind": "IDENTIFIER_PATH", "children": [ident("BlinkC"), ident("Boot")] }
                                    ]
                                }
                            ]
                        }
                    ]
                }
            ]
        }));
        assert_eq!(
            file.render_source().unwrap(),
            concat!(
                "configuration BlinkAppC  {\n",
                "}\n",
                "implementation {\n",
                "    components MainC , BlinkC ;\n",
                "    BlinkC .Boot  -> MainC ;\n",
                "}\n",
                "\n",
            )
        );
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let file = tree(json!({
            "kind": "FILE",
            "children": [line("\"a.h\""), int_declaration("x"), int_declaration("y")]
        }));
        let mut unparser = Unparser::new(Vec::new());
        unparser.unparse(&file).unwrap();
        // The header region is still open when the first render ends.
        assert!(unparser.state().header_suppressed);
        unparser.unparse(&file).unwrap();

        let output = String::from_utf8(unparser.into_inner()).unwrap();
        assert_eq!(output, "#include \"a.h\"\n\n#include \"a.h\"\n\n");
    }

    #[test]
    fn test_indent_level_is_restored_after_render() {
        let file = tree(json!({
            "kind": "FILE",
            "children": [function("run", vec![
                json!({ "kind": "ATOMIC", "children": [{ "kind": "COMPOUND_STATEMENT", "children": [{ "kind": "BREAK" }] }] })
            ])]
        }));
        let mut unparser = Unparser::new(Vec::new());
        unparser.unparse(&file).unwrap();
        assert_eq!(unparser.state().indent_level, 0);
        assert_eq!(unparser.state().declarator_depth, vec![0]);
        assert!(!unparser.state().parens_suppressed);

        let output = String::from_utf8(unparser.into_inner()).unwrap();
        for line in output.lines().filter(|l| !l.trim().is_empty()) {
            let leading = line.len() - line.trim_start().len();
            assert_eq!(leading % 4, 0, "odd indentation in {:?}", line);
        }
    }

    #[test]
    fn test_negated_condition_keeps_its_grouping() {
        let statement = tree(json!({
            "kind": "IF",
            "children": [
                {
                    "kind": "NOT",
                    "children": [{ "kind": "AND", "children": [ident("a"), ident("b")] }]
                },
                { "kind": "BREAK" }
            ]
        }));
        assert_eq!(
            statement.render_source().unwrap(),
            "if( !( a  && b  ) )\n    break;\n\n"
        );
    }

    #[test]
    fn test_dereferenced_sum_keeps_its_grouping() {
        let statement = tree(json!({
            "kind": "STATEMENT",
            "children": [{
                "kind": "DEREFERENCE",
                "children": [{ "kind": "PLUS", "children": [ident("p"), { "kind": "CONSTANT", "text": "1" }] }]
            }]
        }));
        assert_eq!(statement.render_source().unwrap(), "( *( p  + 1  ) );\n\n");
    }

    #[test]
    fn test_rendering_twice_gives_identical_text() {
        let condition = json!({
            "kind": "NOT",
            "children": [{ "kind": "OR", "children": [ident("busy"), ident("done")] }]
        });
        let call = json!({
            "kind": "POSTFIX_EXPRESSION",
            "children": [
                ident("post"),
                {
                    "kind": "ARGUMENT_LIST",
                    "children": [{ "kind": "PLUS", "children": [ident("n"), { "kind": "CONSTANT", "text": "1" }] }]
                }
            ]
        });
        let body = vec![
            int_declaration("n"),
            json!({
                "kind": "IF",
                "children": [condition.clone(), { "kind": "STATEMENT", "children": [call.clone()] }]
            }),
            json!({
                "kind": "WHILE",
                "children": [condition, { "kind": "COMPOUND_STATEMENT", "children": [{ "kind": "STATEMENT", "children": [call] }] }]
            }),
        ];
        let file = tree(json!({
            "kind": "FILE",
            "children": [line("\"RunC.nc\""), int_declaration("count"), function("run", body)]
        }));

        let render_fresh = |node: &Node| {
            let mut unparser = Unparser::new(Vec::new());
            unparser.unparse(node).unwrap();
            String::from_utf8(unparser.into_inner()).unwrap()
        };
        let first = render_fresh(&file);
        let second = render_fresh(&file);

        assert_eq!(first, second);
        assert_eq!(first, file.render_source().unwrap());
        assert!(first.contains("if( !( busy  || done  ) )\n"));
        assert!(first.contains("post ( ( n  + 1  ) );\n"));
    }

    #[test]
    fn test_unknown_kinds_degrade_to_text() {
        let statement = tree(json!({
            "kind": "STATEMENT",
            "children": [{ "kind": "GCC_STATEMENT_EXPRESSION", "text": "__extension__", "children": [ident("ignored")] }]
        }));
        assert_eq!(statement.render_source().unwrap(), "__extension__ ;\n\n");
    }

    #[test]
    fn test_null_placeholder_is_transparent() {
        let node = Node::new(
            NodeKind::Null,
            vec![Node::leaf(NodeKind::RawIdentifier, "a"), Node::leaf(NodeKind::RawIdentifier, "b")],
        );
        assert_eq!(node.render_source().unwrap(), "a b \n");
    }

    #[test]
    fn test_malformed_tree_aborts_render() {
        let statement = tree(json!({ "kind": "IF", "children": [ident("x")] }));
        let err = statement.render_source().unwrap_err();
        assert!(err.to_string().contains("IF"));
    }

    #[test]
    fn test_tree_dump() {
        let node = tree(int_declaration("n"));
        assert_eq!(
            node.render_tree().unwrap(),
            "(DECLARATION int (DECLARATOR_LIST (DECLARATOR n)))\n"
        );
    }
}
