use basic::mach::{Console, Event, Runtime, Transcript};

#[derive(Default)]
pub struct Basic {
    runtime: Runtime,
    console: Transcript,
}

impl Basic {
    pub fn new() -> Basic {
        Basic::default()
    }

    /// Enter a line as if typed. Errors are printed the way the terminal
    /// shows them.
    pub fn enter(&mut self, s: &str) -> Event {
        match self.runtime.enter(s, &mut self.console) {
            Ok(event) => event,
            Err(error) => {
                self.console
                    .print_line(&format!("?{}", error))
                    .expect("transcript never fails");
                Event::Ready
            }
        }
    }

    pub fn input(&mut self, s: &str) {
        self.console.push_input(s);
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }
}

pub fn exec(basic: &mut Basic) -> String {
    basic.console.take_output()
}
