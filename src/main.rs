use clap::{Parser, Subcommand};
use rgit::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "rgit",
    version = "0.2.0",
    author = "Sami Barbut-Dica",
    about = "A lightweight git front-end",
    long_about = "rgit keeps its own staging index and works out the status of your \
    working tree by itself; everything touching actual objects, refs and \
    checkouts is delegated to the git binary on your PATH.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command shows staged changes, unstaged changes and untracked files."
    )]
    Status,
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command hashes the given files through the object store and records \
        them in the staging index. Directories are expanded recursively."
    )]
    Add {
        #[arg(required = true, help = "The paths to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command turns the staging index into a tree and commit, moves the \
        current branch to it and resynchronizes the index from the new HEAD."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command shows the decorated one-line commit graph of the current branch."
    )]
    Log,
    #[command(
        name = "branch",
        about = "List, create, or delete branches",
        long_about = "Without arguments this lists branches; with a name it creates a branch; \
        with -d it deletes one."
    )]
    Branch {
        #[arg(index = 1, help = "The branch to create")]
        name: Option<String>,
        #[arg(short = 'd', long = "delete", conflicts_with = "name", help = "The branch to delete")]
        delete: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to a branch or commit",
        long_about = "This command delegates the checkout itself and then resynchronizes the \
        staging index from the new HEAD."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch or commit to check out")]
        target: String,
    },
}

#[tokio::main]
async fn main() {
    // Usage problems exit 1 like every other failure, not clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let failed = err.use_stderr();
            let _ = err.print();
            std::process::exit(if failed { 1 } else { 0 });
        }
    };

    if let Err(err) = run(&cli).await {
        eprintln!("rgit: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init().await
        }
        Commands::Status => {
            let mut repository = Repository::discover(Box::new(std::io::stdout()))?;

            repository.status().await
        }
        Commands::Add { paths } => {
            let mut repository = Repository::discover(Box::new(std::io::stdout()))?;

            repository.add(paths).await
        }
        Commands::Commit { message } => {
            let mut repository = Repository::discover(Box::new(std::io::stdout()))?;

            repository.commit(message.as_str()).await
        }
        Commands::Log => {
            let repository = Repository::discover(Box::new(std::io::stdout()))?;

            repository.log()
        }
        Commands::Branch { name, delete } => {
            let repository = Repository::discover(Box::new(std::io::stdout()))?;

            repository.branch(name.as_deref(), delete.as_deref())
        }
        Commands::Checkout { target } => {
            let mut repository = Repository::discover(Box::new(std::io::stdout()))?;

            repository.checkout(target).await
        }
    }
}
