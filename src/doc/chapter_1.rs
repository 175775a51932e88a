/*!
# Expressions

All values are signed 32-bit integers.

Variable names start with an ASCII letter followed by letters, digits or
underscores. Names are case-sensitive so `total` and `TOTAL` are two
different variables. Reading a variable that was never assigned is a
`VARIABLE NOT DEFINED` error.

Operators, from lowest to highest precedence:

| Operator | Meaning |
|---|---|
| `=` | assignment, right to left |
| `+` `-` | addition and subtraction |
| `*` `/` | multiplication and division |
| `-` | negation |

Parentheses group as usual. Division truncates toward zero. Any result
that does not fit in 32 bits is an `OVERFLOW` error. Dividing by zero is
a `DIVISION BY ZERO` error.

```text
PRINT 1 + 2 * 3
7
PRINT -7 / 2
-3
LET A = B = 4
PRINT A + B
8
```

Assignment is an expression that yields the value assigned. This is how
`LET` works and why `LET A = B = 4` sets both variables.

The comparison operators `<`, `>` and `=` inside `IF` are not part of
expressions. They split the condition into two expressions.
*/
