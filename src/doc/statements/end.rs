/*!
# `END`

## Purpose
Stop the program.

## Remarks
Running off the last line also stops the program. `END` is not allowed in
direct mode.

## Example
```text
10 PRINT 1
20 END
30 PRINT 2
```

*/
