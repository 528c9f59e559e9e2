use chrono::{Duration, NaiveDate};
use flowline::prelude::*;
use flowline::{Application, CommandLine, Fields, Parameter, Range};

#[derive(Debug, Default)]
struct Report {
    since: NaiveDate,
    window: Duration,
    pages: Range<i32>,
    tags: Vec<String>,
    verbose: bool,
}

impl Bindable for Report {
    fn fields() -> Fields<Self> {
        Fields::new()
            .field("since", |r: &mut Report| &mut r.since)
            .field("window", |r: &mut Report| &mut r.window)
            .field("pages", |r: &mut Report| &mut r.pages)
            .field("tags", |r: &mut Report| &mut r.tags)
            .field("verbose", |r: &mut Report| &mut r.verbose)
    }
}

fn main() {
    let program = CommandLine::new()
        .application(Application::new("options", "0.1.0").executable("options"))
        .option(Parameter::new("since").short("s").required().help("The first day to report on."))
        .option(Parameter::new("window").short("w").help("How long each bucket spans, ex: 01:30:00."))
        .option(Parameter::new("pages").help("The page range to include, ex: 1-10."))
        .option(Parameter::new("tags").help("Space separated tags; quote the whole list."))
        .option(Parameter::with_field("verbose").help("Print the report in full."))
        .build();

    if let Some(report) = program.run_options::<Report>() {
        println!("{report:#?}");
    }
}
