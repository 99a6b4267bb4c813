use crate::{
    ast::statements::{PrintValue, Stmt},
    errors::errors::Error,
};

use super::{
    emitter::{indentation, Emitter},
    expr::emit_expression,
};

/// Emits one statement at the given nesting depth.
///
/// The match is exhaustive over the closed statement set; a new statement
/// kind cannot be added without deciding its emission here.
pub fn emit_statement(emitter: &mut Emitter, statement: &Stmt, depth: usize) -> Result<String, Error> {
    let pad = indentation(depth);

    match statement {
        Stmt::Print(PrintValue::Text(text)) => Ok(format!("{}println!(\"{}\");\n", pad, text)),
        Stmt::Print(PrintValue::Expression(expression)) => Ok(format!(
            "{}println!(\"{{}}\", {});\n",
            pad,
            emit_expression(expression)?
        )),
        Stmt::Let {
            variable,
            expression,
        } => {
            let value = emit_expression(expression)?;

            if emitter.is_symbol_bound(variable) {
                return Ok(format!("{}{} = {};\n", pad, variable, value));
            }

            emitter.bind_symbol(variable);
            Ok(format!("{}let mut {} = {};\n", pad, variable, value))
        }
        Stmt::Input { variable } => {
            let buffer = format!("{}let mut {}_input = String::new();\n", pad, variable);
            let read = format!("{}stdin().read_line(&mut {}_input);\n", pad, variable);
            let parse = format!(
                "{}let mut {}: i32 = {}_input.trim().parse().expect(\"Input is not an integer\");\n",
                pad, variable, variable
            );

            emitter.bind_symbol(variable);

            Ok(format!("{}{}{}", buffer, read, parse))
        }
        Stmt::If {
            condition,
            then_branch,
        } => {
            let comparison = emit_expression(condition)?;

            let mut block = String::new();
            for block_statement in then_branch.iter() {
                block.push_str(&emit_statement(emitter, block_statement, depth + 1)?);
            }

            Ok(format!("{}if {} {{\n{}{}}}\n", pad, comparison, block, pad))
        }
        Stmt::While { condition, body } => {
            let comparison = emit_expression(condition)?;

            let mut block = String::new();
            for block_statement in body.iter() {
                block.push_str(&emit_statement(emitter, block_statement, depth + 1)?);
            }

            Ok(format!("{}while {} {{\n{}{}}}\n", pad, comparison, block, pad))
        }
        // The target syntax has no goto. Labels and gotos are validated
        // during parsing and produce no output text.
        Stmt::Label { .. } => Ok(String::new()),
        Stmt::Goto { .. } => Ok(String::new()),
    }
}
