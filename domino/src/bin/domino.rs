use domino::process;
use miette::{miette, Context, IntoDiagnostic};

#[tracing::instrument]
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [configuration, mode, steps] = args.as_slice() else {
        return Err(miette!(
            "usage: domino <CONFIGURATION> <forward|backward> <STEPS>"
        ));
    };

    let steps = steps
        .parse::<i64>()
        .into_diagnostic()
        .context("step count must be an integer")?;

    let result = process(configuration, mode, steps).context("run simulation")?;
    println!("{}", result);
    Ok(())
}
