/*!
# `GOTO <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
The target must be a plain number. If the line doesn't exist when the
`GOTO` runs a `LINE NUMBER ERROR` occurs and the program stops on the
`GOTO` line. Not allowed in direct mode.

## Example
```text
10 GOTO 30
20 PRINT 20
30 PRINT 30
```

*/
