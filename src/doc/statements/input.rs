/*!
# `INPUT <variable>`

## Purpose
Ask the user for a number and store it.

## Remarks
The prompt is ` ? `. Anything that isn't an integer prints
`?REDO FROM START` and asks again. When there is no more input an
`INPUT PAST END` error occurs.

## Example
```text
10 INPUT N
20 PRINT N * N
RUN
 ? 12
144
```

*/
