use std::fmt;

use serde::{Deserialize, Serialize};

/// Builds [`NodeKind`] from a table of `Variant => "TOKEN_NAME"` entries.
/// Entries that stand for a fixed piece of source text carry it after a colon.
macro_rules! node_kinds {
    (@spelling $spelling:literal) => {
        Some($spelling)
    };
    (@spelling) => {
        None
    };
    ($($variant:ident => $name:literal $(: $spelling:literal)?,)*) => {
        /// Grammar construct a [`Node`](crate::Node) stands for.
        ///
        /// Names follow the token names of the nesC grammar. Anything the table
        /// does not know decodes as [`NodeKind::Other`] and is rendered by the
        /// fallback rule.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum NodeKind {
            $($variant,)*
            Other(String),
        }

        impl NodeKind {
            /// The grammar token name, e.g. `DECLARATION`.
            pub fn name(&self) -> &str {
                match self {
                    $(NodeKind::$variant => $name,)*
                    NodeKind::Other(name) => name,
                }
            }

            /// Source text of keyword and operator kinds.
            pub fn spelling(&self) -> Option<&'static str> {
                match self {
                    $(NodeKind::$variant => node_kinds!(@spelling $($spelling)?),)*
                    NodeKind::Other(_) => None,
                }
            }

            pub fn from_name(name: &str) -> NodeKind {
                match name {
                    $($name => NodeKind::$variant,)*
                    other => NodeKind::Other(other.to_string()),
                }
            }
        }
    };
}

node_kinds! {
    // Leaves
    RawIdentifier => "RAW_IDENTIFIER",
    Identifier => "IDENTIFIER",
    Constant => "CONSTANT",
    StringLiteral => "STRING_LITERAL",
    CharacterLiteral => "CHARACTER_LITERAL",

    // Keywords that stand for themselves
    Async => "ASYNC": "async",
    Auto => "AUTO": "auto",
    Call => "CALL": "call",
    Char => "CHAR": "char",
    Command => "COMMAND": "command",
    Const => "CONST": "const",
    Double => "DOUBLE": "double",
    Extern => "EXTERN": "extern",
    Event => "EVENT": "event",
    Float => "FLOAT": "float",
    Inline => "INLINE": "inline",
    Int => "INT": "int",
    Long => "LONG": "long",
    Norace => "NORACE": "norace",
    Post => "POST": "post",
    Register => "REGISTER": "register",
    Restrict => "RESTRICT": "restrict",
    Short => "SHORT": "short",
    Signal => "SIGNAL": "signal",
    Signed => "SIGNED": "signed",
    Static => "STATIC": "static",
    Task => "TASK": "task",
    Typedef => "TYPEDEF": "typedef",
    Unsigned => "UNSIGNED": "unsigned",
    Void => "VOID": "void",
    Volatile => "VOLATILE": "volatile",
    Configuration => "CONFIGURATION": "configuration",
    Module => "MODULE": "module",
    Generic => "GENERIC": "generic",

    // Declarations
    TypeName => "TYPE_NAME",
    Declaration => "DECLARATION",
    Struct => "STRUCT": "struct",
    Union => "UNION": "union",
    NxStruct => "NX_STRUCT": "nx_struct",
    NxUnion => "NX_UNION": "nx_union",
    Enum => "ENUM": "enum",
    Enumerator => "ENUMERATOR",
    DeclaratorList => "DECLARATOR_LIST",
    InitDeclarator => "INIT_DECLARATOR",
    Declarator => "DECLARATOR",
    InitializerList => "INITIALIZER_LIST",
    PointerQualifier => "POINTER_QUALIFIER",
    DeclaratorArrayModifier => "DECLARATOR_ARRAY_MODIFIER",
    DeclaratorParameterListModifier => "DECLARATOR_PARAMETER_LIST_MODIFIER",
    ParameterList => "PARAMETER_LIST",
    Parameter => "PARAMETER",
    FunctionDefinition => "FUNCTION_DEFINITION",

    // Statements
    Statement => "STATEMENT",
    CompoundStatement => "COMPOUND_STATEMENT",
    LabeledStatement => "LABELED_STATEMENT",
    Case => "CASE",
    Default => "DEFAULT",
    Atomic => "ATOMIC",
    If => "IF",
    Switch => "SWITCH",
    While => "WHILE",
    Do => "DO",
    For => "FOR",
    ForInitialize => "FOR_INITIALIZE",
    ForCondition => "FOR_CONDITION",
    ForIteration => "FOR_ITERATION",
    Goto => "GOTO",
    Continue => "CONTINUE",
    Break => "BREAK",
    Return => "RETURN",

    // Binary operators
    Amp => "AMP": "&",
    And => "AND": "&&",
    Assign => "ASSIGN": "=",
    BitAndAssign => "BITANDASSIGN": "&=",
    BitOr => "BITOR": "|",
    BitOrAssign => "BITORASSIGN": "|=",
    BitXor => "BITXOR": "^",
    BitXorAssign => "BITXORASSIGN": "^=",
    Comma => "COMMA": ",",
    DivAssign => "DIVASSIGN": "/=",
    Divide => "DIVIDE": "/",
    Equal => "EQUAL": "==",
    Greater => "GREATER": ">",
    GreaterEqual => "GREATEREQUAL": ">=",
    Less => "LESS": "<",
    LessEqual => "LESSEQUAL": "<=",
    LShift => "LSHIFT": "<<",
    LShiftAssign => "LSHIFTASSIGN": "<<=",
    Minus => "MINUS": "-",
    MinusAssign => "MINUSASSIGN": "-=",
    Modulus => "MODULUS": "%",
    ModAssign => "MODASSIGN": "%=",
    NotEqual => "NOTEQUAL": "!=",
    Or => "OR": "||",
    Plus => "PLUS": "+",
    PlusAssign => "PLUSASSIGN": "+=",
    RShift => "RSHIFT": ">>",
    RShiftAssign => "RSHIFTASSIGN": ">>=",
    Star => "STAR": "*",

    // Unary and postfix expressions
    PostfixExpression => "POSTFIX_EXPRESSION",
    BuiltinVaArg => "BUILTIN_VA_ARG",
    ArgumentList => "ARGUMENT_LIST",
    ArrayElementSelection => "ARRAY_ELEMENT_SELECTION",
    Dot => "DOT": ".",
    Arrow => "ARROW": "->",
    BackArrow => "BACKARROW": "<-",
    PlusPlus => "PLUSPLUS": "++",
    MinusMinus => "MINUSMINUS": "--",
    PreIncrement => "PRE_INCREMENT",
    PreDecrement => "PRE_DECREMENT",
    AddressOf => "ADDRESS_OF",
    UnaryPlus => "UNARY_PLUS",
    UnaryMinus => "UNARY_MINUS",
    SizeofType => "SIZEOF_TYPE",
    SizeofExpression => "SIZEOF_EXPRESSION",
    Cast => "CAST",
    BitComplement => "BITCOMPLEMENT",
    Not => "NOT",
    Dereference => "DEREFERENCE",

    // Files, components and wiring
    File => "FILE",
    LineDirective => "LINE_DIRECTIVE",
    Interface => "INTERFACE",
    ComponentDefinition => "COMPONENT_DEFINITION",
    ComponentKind => "COMPONENT_KIND",
    ComponentParameterList => "COMPONENT_PARAMETER_LIST",
    Specification => "SPECIFICATION",
    Uses => "USES",
    Provides => "PROVIDES",
    InterfaceType => "INTERFACE_TYPE",
    Implementation => "IMPLEMENTATION",
    Components => "COMPONENTS",
    ComponentDeclaration => "COMPONENT_DECLARATION",
    ComponentInstantiation => "COMPONENT_INSTANTIATION",
    ComponentArguments => "COMPONENT_ARGUMENTS",
    Connection => "CONNECTION",
    IdentifierPath => "IDENTIFIER_PATH",
    Null => "NULL",
}

impl NodeKind {
    pub fn is_other(&self) -> bool {
        matches!(self, NodeKind::Other(_))
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        NodeKind::from_name(&name)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
