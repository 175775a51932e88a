use crate::lang::{Error, ErrorCode, LineNumber};
use crate::mach::{Program, Transcript};

mod direct_test;

fn program(lines: &[(LineNumber, &str)]) -> Program {
    let mut program = Program::new();
    for (number, text) in lines {
        if let Err(e) = program.insert_line(*number, text) {
            panic!("{} : {:?}", e, e);
        }
    }
    program
}

fn run(program: &mut Program, console: &mut Transcript) -> Result<String, Error> {
    program.run(console)?;
    Ok(console.take_output())
}
