/*!
# Statements

A statement is recognized by the first keyword found anywhere in the line,
checked in this order: `REM`, `LET`, `PRINT`, `INPUT`, `END`, `GOTO`, `IF`.
An `IF` needs `THEN` too. Keywords must be upper case.
*/

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;
