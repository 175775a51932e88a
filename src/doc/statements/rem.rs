/*!
# `REM <anything>`

## Purpose
A remark. The rest of the line is ignored.

## Remarks
Because keywords are matched anywhere in the line, a line containing
`REM` is a remark even when another keyword comes first.

*/
