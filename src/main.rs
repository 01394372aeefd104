#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("`jsonschema-draft4` CLI is only available with the `cli` feature");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::{
        fs::File,
        io::BufReader,
        path::{Path, PathBuf},
        process,
    };

    use jsonschema_draft4::JSONSchema;
    use structopt::StructOpt;

    #[derive(StructOpt)]
    #[structopt(name = "jsonschema-draft4")]
    struct Cli {
        /// A path to a JSON instance (i.e. filename.json) to validate (may be specified multiple times).
        #[structopt(short = "i", long = "instance")]
        instances: Option<Vec<PathBuf>>,

        /// The JSON Schema to validate with (i.e. schema.json).
        #[structopt(parse(from_os_str), required_unless = "version")]
        schema: Option<PathBuf>,

        /// Do not download remote schema documents; remote references
        /// resolve to the accept-all schema.
        #[structopt(long = "offline")]
        offline: bool,

        /// Print the error bags as JSON instead of plain text.
        #[structopt(long = "json")]
        json: bool,

        /// Show program's version number and exit.
        #[structopt(short = "v", long = "version")]
        version: bool,
    }

    fn read_json(path: &Path) -> serde_json::Result<serde_json::Value> {
        let file = File::open(path).expect("Failed to open file");
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
    }

    fn validate_instances(
        instances: &[PathBuf],
        schema_path: PathBuf,
        offline: bool,
        json: bool,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let mut success = true;

        let schema_json = read_json(&schema_path)?;
        match JSONSchema::options()
            .with_download(!offline)
            .compile(&schema_json)
        {
            Ok(schema) => {
                for instance in instances {
                    let instance_json = read_json(instance)?;
                    let errors = schema.validate(&instance_json);
                    let filename = instance.to_string_lossy();
                    if errors.is_empty() {
                        println!("{} - VALID", filename);
                    } else {
                        success = false;
                        if json {
                            println!("{}", serde_json::to_string_pretty(&errors)?);
                        } else {
                            println!("{} - INVALID. Errors:", filename);
                            print!("{}", errors);
                        }
                    }
                }
            }
            Err(error) => {
                println!("Schema is invalid. Error: {}", error);
                success = false;
            }
        }
        Ok(success)
    }

    let config = Cli::from_args();

    if config.version {
        println!(concat!("Version: ", env!("CARGO_PKG_VERSION")));
        return Ok(());
    }

    let mut success = true;
    if let Some(schema) = config.schema {
        if let Some(instances) = config.instances {
            success = validate_instances(&instances, schema, config.offline, config.json)?;
        }
    }

    if !success {
        process::exit(1);
    }

    Ok(())
}
