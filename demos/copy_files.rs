use flowline::prelude::*;
use flowline::{Application, CommandLine, Fields, Parameter};

#[derive(Debug, Default)]
struct Copy {
    source: String,
    target: String,
    extensions: Vec<String>,
    overwrite: bool,
}

impl Bindable for Copy {
    fn fields() -> Fields<Self> {
        Fields::new()
            .field("source", |c: &mut Copy| &mut c.source)
            .field("target", |c: &mut Copy| &mut c.target)
            .field("extensions", |c: &mut Copy| &mut c.extensions)
            .field("overwrite", |c: &mut Copy| &mut c.overwrite)
    }
}

fn main() {
    let mut plan: Vec<Copy> = Vec::default();

    let program = CommandLine::new()
        .application(
            Application::new("copy_files", "2.1.0")
                .copyright("(c) The flowline authors")
                .executable("copy_files"),
        )
        .command(
            "copy",
            "Plan a copy from one directory into another.",
            vec![
                Parameter::new("source").positional().help("The directory to copy from."),
                Parameter::new("target").short("t").required().help("The directory to copy into."),
                Parameter::new("extensions").short("e").help("Only copy these extensions."),
                Parameter::new("overwrite").short("o").help("Replace files which already exist."),
            ],
            |copy: Copy| plan.push(copy),
        )
        .build();

    let outcome = program.run_command();

    for copy in &plan {
        println!(
            "copy {} -> {} (extensions: {:?}, overwrite: {})",
            copy.source, copy.target, copy.extensions, copy.overwrite
        );
    }

    std::process::exit(outcome.exit_code());
}
