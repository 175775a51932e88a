/*!
# Introductory Tutorial

Start the `basic` executable in a terminal. You should see this.
<pre><code>&nbsp;  BASIC
&nbsp;  READY.
&nbsp;] █
</code></pre>

Type CTRL-D or `QUIT` to leave.

A line typed without a number runs immediately. This is called direct mode.
Only `LET`, `PRINT` and `INPUT` may be used this way.

<pre><code>&nbsp;] LET A = 6
&nbsp;] PRINT A * 7
&nbsp;  42
</code></pre>

A line that starts with a number is stored in the program instead. The
number decides where the line goes. Lines are kept in numeric order no
matter what order you type them in.

<pre><code>&nbsp;] 20 PRINT X
&nbsp;] 10 LET X = 1
&nbsp;] LIST
&nbsp;  10 LET X = 1
&nbsp;  20 PRINT X
&nbsp;] RUN
&nbsp;  1
</code></pre>

Typing a line number that already exists replaces that line. Typing a
line number by itself deletes the line. Press TAB after a line number to
bring the stored line back for editing.

<pre><code>&nbsp;] 20 PRINT X + 1
&nbsp;] 10
&nbsp;] LIST
&nbsp;  20 PRINT X + 1
</code></pre>

Variables live until `CLEAR`. A program can read what an earlier `RUN`
or a direct statement left behind.

Here is a loop that counts to three.

<pre><code>&nbsp;] 10 LET X = 0
&nbsp;] 20 LET X = X + 1
&nbsp;] 30 PRINT X
&nbsp;] 40 IF X < 3 THEN 20
&nbsp;] 50 END
&nbsp;] RUN
&nbsp;  1
&nbsp;  2
&nbsp;  3
</code></pre>

When something goes wrong an error is printed with a leading `?`. The line
number and the columns of the offending text follow when they are known.

<pre><code>&nbsp;] 10 GOTO 99
&nbsp;] RUN
&nbsp;  ?LINE NUMBER ERROR IN 10 (5..7)
</code></pre>

A file of lines can be run with `basic FILE`. Each line is entered as if
typed. Set `RUST_LOG=debug` to see what the interpreter is doing.
*/
