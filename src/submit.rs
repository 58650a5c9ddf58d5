use anyhow::{anyhow, Context};
use log::info;

use fortified::flow::{ContactForm, Outcome, Persistence, Recorder, Settings, Submission};
use fortified::store::{Absent, HttpStore, RecordStore};

pub struct Args {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// Push one inquiry through the contact flow from the terminal.
pub async fn run(args: Args, store: Option<String>, skip_store: bool) -> anyhow::Result<()> {
    let mut settings = Settings::from_env()?;
    if skip_store {
        settings.persistence = Persistence::AlwaysSkip;
    }

    let store: Box<dyn RecordStore> = match store.or_else(|| std::env::var("INQUIRY_STORE_URL").ok())
    {
        Some(base) => Box::new(
            HttpStore::new(&base).with_context(|| format!("Invalid store address {}", base))?,
        ),
        None => {
            info!("No inquiry store configured");
            Box::new(Absent)
        }
    };

    let mut form = ContactForm::filled(&args.name, &args.phone, &args.service, &args.message);
    let recorder = Recorder::new();

    match Submission::new(store.as_ref(), &recorder, &recorder, &settings)
        .submit(&mut form)
        .await
    {
        Outcome::Redirected { url, .. } => {
            println!("{}", url);
            Ok(())
        }
        Outcome::Invalid(errors) => Err(anyhow!(errors
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect::<Vec<_>>()
            .join("\n"))),
        Outcome::Failed(failure) => Err(anyhow!("Submission Error: {}", failure)),
    }
}
