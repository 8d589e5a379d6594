use std::io::Write;

use anyhow::{anyhow, Result};
use tracing::{debug, warn};

use crate::ast::{Node, NodeKind as K};
use crate::renderer::state::RenderState;

/// Writes a syntax tree back out as nesC source.
///
/// Output streams into `sink` as the tree is walked. The render state is
/// reset at the start of every [`unparse`](Unparser::unparse), so one
/// instance may render several trees in sequence, but never two at once.
pub struct Unparser<W: Write> {
    sink: W,
    pub(crate) state: RenderState,
}

/// Child `index` of `node`, or an error naming the node when the tree does
/// not have the shape its kind promises.
pub(crate) fn child(node: &Node, index: usize) -> Result<&Node> {
    node.child(index).ok_or_else(|| {
        anyhow!(
            "{} node has {} children, expected at least {}",
            node.kind(),
            node.child_count(),
            index + 1
        )
    })
}

impl<W: Write> Unparser<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            state: RenderState::new(),
        }
    }

    /// Renders the tree rooted at `root` as source text, followed by a newline.
    pub fn unparse(&mut self, root: &Node) -> Result<()> {
        self.state = RenderState::new();
        debug!(root = %root.kind(), "rendering syntax tree");
        self.render(root)?;
        self.emit("\n")?;
        self.sink.flush()?;
        debug!("finished rendering syntax tree");
        Ok(())
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    pub(crate) fn emit(&mut self, text: &str) -> Result<()> {
        self.sink.write_all(text.as_bytes())?;
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    pub(crate) fn indent(&mut self) -> Result<()> {
        let indent = self.state.indent();
        self.emit(&indent)
    }

    /// Runs `f` one indentation level deeper.
    pub(crate) fn nested<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let saved = self.state.indent_level;
        self.state.indent_level += 1;
        let result = f(self);
        self.state.indent_level = saved;
        result
    }

    /// Runs `f` one indentation level shallower. Used for braces and labels.
    pub(crate) fn outdented<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let saved = self.state.indent_level;
        self.state.indent_level = saved.saturating_sub(1);
        let result = f(self);
        self.state.indent_level = saved;
        result
    }

    /// Runs `f` with expression parentheses turned off (`true`) or on (`false`).
    pub(crate) fn with_parens_suppressed<F>(&mut self, suppressed: bool, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let saved = self.state.parens_suppressed;
        self.state.parens_suppressed = suppressed;
        let result = f(self);
        self.state.parens_suppressed = saved;
        result
    }

    /// Runs `f` in a fresh declarator scope, as inside a parameter list.
    pub(crate) fn in_parameter_scope<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let depth = self.state.declarator_depth.len();
        self.state.declarator_depth.push(0);
        let result = f(self);
        self.state.declarator_depth.truncate(depth);
        result
    }

    /// Runs `f` one declarator deeper within the current parameter scope.
    pub(crate) fn in_declarator<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let saved = self.state.declarator_nesting();
        self.set_declarator_nesting(saved + 1);
        let result = f(self);
        self.set_declarator_nesting(saved);
        result
    }

    fn set_declarator_nesting(&mut self, value: usize) {
        match self.state.declarator_depth.last_mut() {
            Some(top) => *top = value,
            None => self.state.declarator_depth.push(value),
        }
    }

    pub(crate) fn render_all(&mut self, nodes: &[Node]) -> Result<()> {
        for node in nodes {
            self.render(node)?;
        }
        Ok(())
    }

    pub(crate) fn render_separated(&mut self, nodes: &[Node], separator: &str) -> Result<()> {
        for (i, node) in nodes.iter().enumerate() {
            if i != 0 {
                self.emit(separator)?;
            }
            self.render(node)?;
        }
        Ok(())
    }

    /// Dispatches on the node's kind to the rule for that construct.
    pub(crate) fn render(&mut self, node: &Node) -> Result<()> {
        match node.kind() {
            // Leaves and keywords stand for themselves.
            K::RawIdentifier
            | K::Identifier
            | K::Constant
            | K::StringLiteral
            | K::CharacterLiteral
            | K::Async
            | K::Auto
            | K::Call
            | K::Char
            | K::Command
            | K::Const
            | K::Double
            | K::Extern
            | K::Event
            | K::Float
            | K::Inline
            | K::Int
            | K::Long
            | K::Norace
            | K::Post
            | K::Register
            | K::Restrict
            | K::Short
            | K::Signal
            | K::Signed
            | K::Static
            | K::Task
            | K::Typedef
            | K::Unsigned
            | K::Void
            | K::Volatile
            | K::Configuration
            | K::Module
            | K::Generic
            | K::BackArrow => self.render_token(node),

            // Declarations
            K::TypeName => self.render_type_name(node),
            K::Declaration => self.render_declaration(node),
            K::Struct | K::Union | K::NxStruct | K::NxUnion => self.render_struct(node),
            K::Enum => self.render_enum(node),
            K::Enumerator => self.render_enumerator(node),
            K::DeclaratorList => self.render_separated(node.children(), ", "),
            K::InitDeclarator => self.render_init_declarator(node),
            K::Declarator => self.render_declarator(node),
            K::InitializerList => self.render_initializer_list(node),
            K::PointerQualifier => self.render_pointer_qualifier(node),
            K::DeclaratorArrayModifier => self.render_array_modifier(node),
            K::DeclaratorParameterListModifier => self.render_parameter_list_modifier(node),
            K::ParameterList => self.render_parameter_list(node),
            K::Parameter => self.render_parameter(node),
            K::FunctionDefinition => self.render_function_definition(node),

            // Statements
            K::Statement => self.render_expression_statement(node),
            K::CompoundStatement => self.render_compound_statement(node),
            K::LabeledStatement => self.render_labeled_statement(node),
            K::Case => self.render_case(node),
            K::Default => self.render_default(node),
            K::Atomic => self.render_atomic(node),
            K::If => self.render_if(node),
            K::Switch => self.render_controlled("switch", node),
            K::While => self.render_controlled("while", node),
            K::Do => self.render_do(node),
            K::For => self.render_for(node),
            K::ForInitialize | K::ForCondition | K::ForIteration => self.render_for_clause(node),
            K::Goto => self.render_goto(node),
            K::Continue => self.render_jump("continue"),
            K::Break => self.render_jump("break"),
            K::Return => self.render_return(node),

            // Expressions
            K::Amp
            | K::And
            | K::Assign
            | K::BitAndAssign
            | K::BitOr
            | K::BitOrAssign
            | K::BitXor
            | K::BitXorAssign
            | K::Comma
            | K::DivAssign
            | K::Divide
            | K::Equal
            | K::Greater
            | K::GreaterEqual
            | K::Less
            | K::LessEqual
            | K::LShift
            | K::LShiftAssign
            | K::Minus
            | K::MinusAssign
            | K::Modulus
            | K::ModAssign
            | K::NotEqual
            | K::Or
            | K::Plus
            | K::PlusAssign
            | K::RShift
            | K::RShiftAssign
            | K::Star => self.render_binary(node),
            K::PostfixExpression => self.render_postfix_expression(node),
            K::BuiltinVaArg => self.render_va_arg(node),
            K::ArgumentList => self.render_argument_list(node),
            K::ArrayElementSelection => self.render_array_selection(node),
            K::Dot => self.render_prefixed(".", node),
            K::Arrow => self.render_prefixed("->", node),
            K::PlusPlus => self.emit("++"),
            K::MinusMinus => self.emit("--"),
            K::PreIncrement => self.render_prefixed("++", node),
            K::PreDecrement => self.render_prefixed("--", node),
            K::AddressOf => self.render_prefixed("&", node),
            K::UnaryPlus => self.render_prefixed("+", node),
            K::UnaryMinus => self.render_prefixed("-", node),
            K::BitComplement => self.render_prefixed("~", node),
            K::Not => self.render_prefixed("!", node),
            K::SizeofType | K::SizeofExpression => self.render_sizeof(node),
            K::Cast => self.render_cast(node),
            K::Dereference => self.render_dereference(node),

            // Files, components and wiring
            K::File => self.render_file(node),
            K::LineDirective => self.render_line_directive(node),
            K::Interface => self.render_interface(node),
            K::ComponentDefinition => self.render_component_definition(node),
            K::ComponentKind => self.render_component_kind(node),
            K::ComponentParameterList => self.render_component_parameter_list(node),
            K::Specification => self.render_specification(node),
            K::Uses => self.render_interface_block("uses", node),
            K::Provides => self.render_interface_block("provides", node),
            K::InterfaceType => self.render_interface_type(node),
            K::Implementation => self.render_implementation(node),
            K::Components => self.render_components(node),
            K::ComponentDeclaration => self.render_component_declaration(node),
            K::ComponentInstantiation => self.render_component_instantiation(node),
            K::ComponentArguments => self.render_separated(node.children(), ", "),
            K::Connection => self.render_connection(node),
            K::IdentifierPath => self.render_separated(node.children(), "."),

            // Placeholder left behind by tree rewriting tools.
            K::Null => self.render_all(node.children()),

            K::Other(name) => {
                warn!(kind = %name, "no rendering rule for node kind, emitting its text");
                self.render_token(node)
            }
        }
    }

    /// Literal text followed by a separating space. The space is only needed
    /// after type names but does no harm elsewhere.
    fn render_token(&mut self, node: &Node) -> Result<()> {
        self.emit(node.spelling().unwrap_or_default())?;
        self.emit(" ")
    }
}
