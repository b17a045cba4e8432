use std::io::{self, Write};

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break; // end of input
        }

        let output = tern::parse(&input);
        for diagnostic in &output.diagnostics {
            eprintln!("{}", diagnostic);
        }
        match output.ast {
            Ok(ast) => println!("{}", ast),
            Err(err) => eprintln!("ERROR: {}", err),
        }
    }

    Ok(())
}
