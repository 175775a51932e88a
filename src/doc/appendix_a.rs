/*!
# Error Messages

Errors print as `?CODE IN <line> (<columns>); <detail>`. The line is left
out for direct mode and the columns when no single token is to blame.
Columns count characters from the start of the statement text, after the
line number.

## SYNTAX ERROR
The line could not be understood. Stored lines are checked when entered
and a line with a syntax error is not stored. The detail says what was
expected, for example `EXPECTED ASSIGNMENT` or
`MULTIPLE COMPARISON OPERATORS FOUND`.

## OVERFLOW
A calculation produced a number outside the 32-bit range.

## LINE NUMBER ERROR
A `GOTO` or `IF` named a line that doesn't exist.

## DIVISION BY ZERO
Division by zero.

## ILLEGAL DIRECT
`REM`, `END`, `GOTO` and `IF` only work inside a program.

## VARIABLE NOT DEFINED
A variable was read before anything was assigned to it.

## LINE DOES NOT EXIST
A line was asked for that isn't stored.

## INPUT PAST END
`INPUT` ran out of input.

## INTERNAL ERROR
The terminal failed.
*/
