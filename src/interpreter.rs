/// The environment module defines variable scopes.
///
/// An environment is an immutable linked chain of bindings. Evaluation
/// extends it for every `_let` body and function call; closures keep the
/// chain they were created in.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the expression tree with an environment and produces
/// a value, reporting runtime errors such as unbound variables or calls to
/// non-functions.
///
/// # Responsibilities
/// - Evaluates every expression variant.
/// - Creates closures and applies them.
/// - Reports runtime errors without partial results.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens with
/// line numbers: integers, identifiers, `_` keywords, operators and
/// parentheses. Whitespace and newlines are skipped.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is recursive descent, with one function per precedence level
/// of the grammar.
///
/// # Responsibilities
/// - Converts tokens into `Expr` trees.
/// - Encodes precedence and associativity through the call structure.
/// - Reports malformed input with the line it was found on.
pub mod parser;
/// The printer module renders expressions back to text.
///
/// Two renderers share the expression tree: the canonical printer and the
/// pretty printer.
pub mod printer;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, booleans and closures, along with the arithmetic and
/// conversion operations the evaluator needs.
pub mod value;
