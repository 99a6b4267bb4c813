/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// The node set is closed: statements and expressions are plain enums and
/// every consumer dispatches with an exhaustive match, so adding a node
/// kind forces each consumer to handle it.
///
/// Submodules:
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for the statement node kinds and the program root
pub mod expressions;
pub mod statements;
