/*!
# `IF <expression> <comparison> <expression> THEN <line number>`

## Purpose
Jump to a line when a comparison holds, otherwise continue with the next line.

## Remarks
The comparison is exactly one of `<`, `>` or `=`. Combinations such as
`<=` or `<>` are errors because they contain two operators. Both sides
are evaluated before comparing. Not allowed in direct mode.

## Example
```text
10 LET X = 0
20 LET X = X + 1
30 IF X < 10 THEN 20
40 PRINT X
```

*/
