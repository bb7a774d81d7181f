use clap::Parser;
use intcalc::{evaluate_postfix, EvalErr, InfixEvaluator, RPNExpr};
use std::process::ExitCode;

/// Evaluate integer arithmetic in infix or postfix (RPN) notation.
///
/// Without an expression an interactive prompt is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read expressions in postfix notation, eg: "4 2 + 3 *"
    #[arg(short, long)]
    postfix: bool,

    /// Reject infix expressions that contain no parentheses
    #[arg(short, long)]
    strict: bool,

    /// Print the postfix form of an infix expression instead of its value
    #[arg(short, long, conflicts_with = "postfix")]
    rpn: bool,

    /// Evaluate a few sample expressions and exit
    #[arg(long, conflicts_with_all = ["postfix", "rpn"])]
    demo: bool,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

#[derive(Clone, Copy, Debug)]
struct Session {
    postfix: bool,
    infix: InfixEvaluator,
}

impl Session {
    fn eval(&self, input: &str) -> Result<i64, EvalErr> {
        if self.postfix {
            evaluate_postfix(input)
        } else {
            self.infix.eval(input)
        }
    }

    fn rpn(&self, input: &str) -> Result<RPNExpr, EvalErr> {
        self.infix.to_postfix(input)
    }
}

fn demo() -> ExitCode {
    let session = Session { postfix: false, infix: InfixEvaluator::new() };
    let cases = [
        ("( 4 + 2 ) * 3", false),
        ("50+(3*7)", false),
        ("3+4*2", false),
        ("4 2 + 3 *", true),
    ];
    for (n, (input, postfix)) in cases.iter().enumerate() {
        let session = Session { postfix: *postfix, ..session };
        match session.eval(input) {
            Ok(value) => println!("Result {}: {} = {}", n + 1, input, value),
            Err(e) => eprintln!("Result {}: {}: {}", n + 1, input, e),
        }
    }
    ExitCode::SUCCESS
}

mod repl {
    use super::Session;
    use rustyline::error::ReadlineError;

    const HELP: &str = "\
:infix | :postfix    switch notation
:strict | :lenient   require parentheses in infix or not
:rpn EXPR            show the postfix form of an infix expression";

    fn command(session: &mut Session, line: &str) {
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        match cmd {
            ":infix" => session.postfix = false,
            ":postfix" => session.postfix = true,
            ":strict" => session.infix.require_parentheses = true,
            ":lenient" => session.infix.require_parentheses = false,
            ":rpn" => match session.rpn(rest) {
                Ok(rpn) => println!("{}", rpn),
                Err(e) => eprintln!("Error: {}", e),
            },
            ":help" => println!("{}", HELP),
            _ => eprintln!("Unknown command {}, try :help", cmd),
        }
    }

    pub fn run(mut session: Session) -> Result<(), String> {
        let histpath = dirs::home_dir().map(|h| h.join(".intcalc_history"));
        let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
        if let Some(path) = &histpath {
            let _ = rl.load_history(path);
        }
        loop {
            let prompt = if session.postfix { "rpn> " } else { ">> " };
            match rl.readline(prompt) {
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(format!("Readline err: {:?}", e)),
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);
                    if line.starts_with(':') {
                        command(&mut session, line);
                        continue;
                    }
                    match session.eval(line) {
                        Ok(value) => println!("{}", value),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
            }
        }
        if let Some(path) = &histpath {
            let _ = rl.save_history(path);
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.demo {
        return demo();
    }
    let infix = InfixEvaluator { require_parentheses: args.strict };
    let session = Session { postfix: args.postfix, infix };

    if args.expression.is_empty() {
        return match repl::run(session) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let input = args.expression.join(" ");
    let output = if args.rpn {
        session.rpn(&input).map(|rpn| rpn.to_string())
    } else {
        session.eval(&input).map(|value| format!("{} = {}", input, value))
    };
    match output {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
