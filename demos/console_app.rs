use flowline::prelude::*;
use flowline::{Application, CommandLine, Fields, Parameter};

#[derive(Debug, Default)]
struct Greet {
    name: String,
    times: i32,
    shout: bool,
}

impl Bindable for Greet {
    fn fields() -> Fields<Self> {
        Fields::new()
            .field("name", |g: &mut Greet| &mut g.name)
            .field("times", |g: &mut Greet| &mut g.times)
            .field("shout", |g: &mut Greet| &mut g.shout)
    }
}

#[derive(Debug, Default)]
struct Sum {
    values: Vec<i64>,
}

impl Bindable for Sum {
    fn fields() -> Fields<Self> {
        Fields::new().field("values", |s: &mut Sum| &mut s.values)
    }
}

fn main() {
    CommandLine::new()
        .application(
            Application::new("console_app", "1.0.0")
                .description("A small demonstration of commands.")
                .executable("console_app"),
        )
        .command(
            "greet",
            "Greet someone, a few times.",
            vec![
                Parameter::new("name").short("n").required().help("Who to greet."),
                Parameter::new("times").short("t").help("How many greetings (default 1)."),
                Parameter::new("shout").help("Greet loudly."),
            ],
            |greet: Greet| {
                let message = format!("Hello, {}!", greet.name);
                let message = if greet.shout {
                    message.to_uppercase()
                } else {
                    message
                };

                for _ in 0..greet.times.max(1) {
                    println!("{message}");
                }
            },
        )
        .command(
            "sum",
            "Add up a comma separated list.",
            vec![Parameter::new("values").positional().help("The values, ex: 1,2,3.")],
            |sum: Sum| println!("Sum: {}", sum.values.iter().sum::<i64>()),
        )
        .build()
        .run();
}
