/*!
# `LET <variable> = <expression>`

## Purpose
Assign a value to a variable.

## Remarks
The word `LET` is required. Assignments may be chained.

## Example
```text
LET A = 1
LET B = C = A + 1
```

*/
