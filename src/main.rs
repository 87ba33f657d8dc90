use clap::Parser;
use miette::Result;
use plm::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    plm::logging::init(global.verbose);

    match cli.command {
        Commands::Init(args) => plm::cli::commands::init::run(args, &global),
        Commands::Style(cmd) => plm::cli::commands::style::run(cmd, &global),
        Commands::Bom(cmd) => plm::cli::commands::bom::run(cmd, &global),
        Commands::Op(cmd) => plm::cli::commands::op::run(cmd, &global),
        Commands::Pack(cmd) => plm::cli::commands::pack::run(cmd, &global),
        Commands::Overhead(cmd) => plm::cli::commands::overhead::run(cmd, &global),
        Commands::Marker(cmd) => plm::cli::commands::marker::run(cmd, &global),
        Commands::Cost(args) => plm::cli::commands::cost::run(args, &global),
        Commands::Quote(cmd) => plm::cli::commands::quote::run(cmd, &global),
        Commands::Decision(cmd) => plm::cli::commands::decision::run(cmd, &global),
        Commands::Status(args) => plm::cli::commands::status::run(args, &global),
        Commands::Config(cmd) => plm::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => plm::cli::commands::completions::run(args),
    }
}
