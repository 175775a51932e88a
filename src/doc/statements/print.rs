/*!
# `PRINT <expression>`

## Purpose
Print the value of an expression on its own line.

## Example
```text
PRINT 6 * 7
42
```

*/
