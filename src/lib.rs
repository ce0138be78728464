/*
*                    pl0ast -- PL/0 abstract syntax trees.
*
* program     = block "." ;
* block       = const-decls var-decls proc-decls statement ;
* const-decls = { "const" const-def { "," const-def } ";" } ;
* const-def   = ident "=" number ;
* var-decls   = { "var" ident { "," ident } ";" } ;
* proc-decls  = { "procedure" ident ";" block ";" } ;
* statement   = ident ":=" expression
*             | "call" ident
*             | "begin" statement { ";" statement } "end"
*             | "if" condition "then" statement "else" statement
*             | "while" condition "do" statement
*             | "read" ident
*             | "write" expression
*             | "skip" ;
* condition   = "odd" expression | expression relOp expression ;
* expression  = expression arithOp expression | ident | number ;
* arithOp     = "+" | "-" | "*" | "/" ;
* relOp       = "=" | "<>" | "<" | "<=" | ">" | ">=" ;
*
* This crate is the tree-construction layer only: the lexer hands it
* tokens, the parser drives the constructors bottom-up, and later
* phases walk the finished tree through the Node/ASTVisitor traits.
*/

pub mod ast;
pub mod errors;
pub mod location;
pub mod token;
pub mod utils;
pub mod visiters;

pub const VERSION: &str = "0.1.0";
