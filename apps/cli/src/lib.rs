//! Easel command-line interface.
//!
//! Each subcommand collects parameters, calls exactly one registry
//! operation, and renders the result. Failures print through the stderr
//! notifier and also set the process exit error.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use ecore::{
    ChatMessage, ChatParams, CodeParams, ImageParams, Notice, Notifier, ProviderId, SpeechParams,
    TextParams, parse_data_uri,
};
use keystore::{KeyStore, TomlKeyStore};
use provider::Registry;
use std::path::{Path, PathBuf};

/// Notifier printing failure notices to stderr.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        eprintln!("[{}:{}] {}", notice.provider, notice.operation, notice.message);
    }
}

/// Generate text, images, chat, code, and speech from the command line.
#[derive(Parser)]
#[command(name = "easel", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage stored API keys.
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
    /// Generate text from a prompt.
    Text {
        /// The prompt to complete.
        prompt: String,
        /// Vendor to use.
        #[arg(long, default_value = "gemini")]
        provider: ProviderId,
        /// Model identifier override.
        #[arg(long)]
        model: Option<String>,
        /// Maximum tokens to generate.
        #[arg(long)]
        max_tokens: Option<u32>,
        /// Sampling temperature.
        #[arg(long)]
        temperature: Option<f64>,
    },
    /// Generate an image.
    Image {
        /// The image description.
        prompt: String,
        /// Vendor to use.
        #[arg(long, default_value = "openai")]
        provider: ProviderId,
        /// Things the image must not contain.
        #[arg(long)]
        negative: Option<String>,
        /// Output width in pixels.
        #[arg(long)]
        width: Option<u32>,
        /// Output height in pixels.
        #[arg(long)]
        height: Option<u32>,
        /// Write the image to a file instead of printing the URI.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Send one chat message and print the reply.
    Chat {
        /// The user message.
        message: String,
        /// Vendor to use.
        #[arg(long, default_value = "gemini")]
        provider: ProviderId,
        /// Optional system prompt sent before the message.
        #[arg(long)]
        system: Option<String>,
        /// Model identifier override.
        #[arg(long)]
        model: Option<String>,
    },
    /// Generate code from a description.
    Code {
        /// What the code should do.
        prompt: String,
        /// Vendor to use.
        #[arg(long, default_value = "gemini")]
        provider: ProviderId,
        /// Target language hint.
        #[arg(long)]
        language: Option<String>,
    },
    /// Synthesize speech with ElevenLabs.
    Speech {
        /// The text to speak.
        text: String,
        /// Voice identifier override.
        #[arg(long)]
        voice: Option<String>,
        /// Write the audio to a file instead of printing the URI.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List ElevenLabs voices.
    Voices,
}

#[derive(Subcommand)]
enum KeyAction {
    /// Save an API key for a provider.
    Set {
        /// The provider the key belongs to.
        provider: ProviderId,
        /// The secret to store.
        secret: String,
    },
    /// Show which providers have a stored key.
    List,
}

impl Cli {
    /// Run the parsed command to completion.
    pub async fn run(self) -> Result<()> {
        let store = TomlKeyStore::open_default()?;
        let registry = Registry::with_notifier(store, ConsoleNotifier);

        match self.command {
            Command::Key { action } => run_key(&registry, action),
            Command::Text {
                prompt,
                provider,
                model,
                max_tokens,
                temperature,
            } => {
                let params = TextParams {
                    model: model.map(Into::into),
                    max_tokens,
                    temperature,
                    ..TextParams::new(prompt)
                };
                let text = registry.generate_text(provider, &params).await?;
                println!("{text}");
                Ok(())
            }
            Command::Image {
                prompt,
                provider,
                negative,
                width,
                height,
                output,
            } => {
                let params = ImageParams {
                    negative_prompt: negative,
                    width,
                    height,
                    ..ImageParams::new(prompt)
                };
                let image = registry.generate_image(provider, &params).await?;
                emit(&image, output.as_deref())
            }
            Command::Chat {
                message,
                provider,
                system,
                model,
            } => {
                let mut messages = Vec::new();
                if let Some(system) = system {
                    messages.push(ChatMessage::system(system));
                }
                messages.push(ChatMessage::user(message));
                let params = ChatParams {
                    model: model.map(Into::into),
                    ..ChatParams::new(messages)
                };
                let reply = registry.chat(provider, &params).await?;
                println!("{reply}");
                Ok(())
            }
            Command::Code {
                prompt,
                provider,
                language,
            } => {
                let params = CodeParams {
                    language,
                    ..CodeParams::new(prompt)
                };
                let code = registry.generate_code(provider, &params).await?;
                println!("{code}");
                Ok(())
            }
            Command::Speech {
                text,
                voice,
                output,
            } => {
                let params = SpeechParams {
                    voice: voice.map(Into::into),
                    ..SpeechParams::new(text)
                };
                let audio = registry.generate_speech(&params).await?;
                emit(&audio, output.as_deref())
            }
            Command::Voices => {
                for voice in registry.voices().await? {
                    match &voice.category {
                        Some(category) => {
                            println!("{}  {} ({category})", voice.voice_id, voice.name)
                        }
                        None => println!("{}  {}", voice.voice_id, voice.name),
                    }
                }
                Ok(())
            }
        }
    }
}

fn run_key<S: KeyStore>(registry: &Registry<S>, action: KeyAction) -> Result<()> {
    match action {
        KeyAction::Set { provider, secret } => {
            registry.set_key(provider, &secret)?;
            println!("saved API key for {}", provider.label());
        }
        KeyAction::List => {
            let configured = registry.configured();
            for provider in ProviderId::ALL {
                let state = if configured.contains(&provider) {
                    "set"
                } else {
                    "unset"
                };
                println!("{:<12} {state}", provider.as_str());
            }
        }
    }
    Ok(())
}

/// Print a result, or decode a `data:` URI to a file when `-o` is given.
fn emit(result: &str, output: Option<&Path>) -> Result<()> {
    match output {
        None => {
            println!("{result}");
            Ok(())
        }
        Some(path) => match parse_data_uri(result) {
            Some((_, bytes)) => {
                std::fs::write(path, bytes)?;
                println!("wrote {}", path.display());
                Ok(())
            }
            None => bail!("result is a URL, not binary data: {result}"),
        },
    }
}
