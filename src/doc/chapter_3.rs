/*!
# Commands

Commands are typed on their own line, upper case, without a line number.
*/

pub mod RUN {
    /*!
    ## `RUN` Executes the program from its lowest line.
    Variables are not reset.
    */
}

pub mod LIST {
    /*!
    ## `LIST` Shows every stored line in order.
    ```text
    LIST
    10 LET X = 1
    20 PRINT X
    ```
    */
}

pub mod CLEAR {
    /*!
    ## `CLEAR` Deletes the program and every variable.
    */
}

pub mod HELP {
    /*!
    ## `HELP` Prints a summary of commands.
    */
}

pub mod QUIT {
    /*!
    ## `QUIT` Leaves BASIC.
    */
}
