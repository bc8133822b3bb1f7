use calc_session::{Resolution, Resolver};
use rustyline::error::ReadlineError;
use tracing::debug;

const PROMPT: &str = "selcalc> ";

const HELP: &str = "\
Type arithmetic to resolve it: 1 + 2, (3 - 1) ^ 10 / 4, 1.5 * 2 =
  {prev}   previous answer (starts at 0)
  {index}   ordinal of the line since the last reset
  =   trailing '=' appends the answer instead of replacing the text
Commands: :reset  :help  :quit";

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Quit,
    Nothing,
}

/// Line-oriented session: `$` carries across lines and every resolved line
/// consumes the next selection index.
pub struct Repl {
    resolver: Resolver,
    next_index: u64,
}

impl Repl {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            next_index: 0,
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.trim() {
            "" => Reply::Nothing,
            ":quit" | ":q" | ":exit" => Reply::Quit,
            ":help" | ":h" => Reply::Print(self.help()),
            ":reset" => {
                self.resolver.reset();
                self.next_index = 0;
                Reply::Print("previous result reset to 0".to_string())
            }
            _ => {
                let index = self.next_index;
                self.next_index += 1;
                let resolution = self.resolver.resolve_detailed(line, index);
                debug!(index, evaluated = resolution.is_evaluated(), "repl line");
                Reply::Print(describe(resolution))
            }
        }
    }

    fn help(&self) -> String {
        let placeholders = self.resolver.placeholders();
        HELP.replace("{prev}", &placeholders.previous_result.to_string())
            .replace("{index}", &placeholders.selection_index.to_string())
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("selcalc: arithmetic resolver. :help for help, :quit to leave.");

        let mut rl = rustyline::DefaultEditor::new()?;

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str())?;
                    }
                    match self.handle_line(&line) {
                        Reply::Print(text) => println!("{}", text),
                        Reply::Quit => break,
                        Reply::Nothing => {}
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

fn describe(resolution: Resolution) -> String {
    match resolution {
        Resolution::Evaluated { output, .. } => output,
        Resolution::Rejected { output, reason } => format!("{}  (not arithmetic: {})", output, reason),
        Resolution::Failed { output, error } => format!("{}  (not evaluated: {})", output, error),
    }
}
