// SPDX-License-Identifier: MPL-2.0
use ai_gallery::app::config::{self, Config};
use ai_gallery::application::port::{AnalyzeError, AnalyzeFuture, Analyzer};
use ai_gallery::application::{analyze_batch, BatchPolicy};
use ai_gallery::domain::gallery::ImageAnalysis;
use ai_gallery::i18n::fluent::I18n;
use ai_gallery::media::{select_images, ImageUpload};
use ai_gallery::ui::gallery::{BatchError, Effect, Message, State};
use std::path::PathBuf;
use tempfile::tempdir;

/// Describes each image by its file stem; `broken` stems are rejected.
struct StemAnalyzer;

impl Analyzer for StemAnalyzer {
    fn analyze(&self, upload: ImageUpload) -> AnalyzeFuture {
        let stem = upload
            .path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Box::pin(async move {
            if stem == "broken" {
                return Err(AnalyzeError::Rejected { status: 502 });
            }
            let mut title = stem.clone();
            if let Some(first) = title.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            Ok(ImageAnalysis {
                title,
                prompt: format!("a photo of a {stem}"),
                format: "PNG".to_string(),
                keywords: vec![stem, "animal".to_string()],
            })
        })
    }
}

fn state_from(config: &Config) -> State {
    State::new(
        config.upload.batch_policy,
        config.gallery.grid_columns(),
        config.gallery.keyword_preview(),
    )
}

async fn upload(state: &mut State, names: &[&str]) {
    let intake = select_images(names.iter().map(PathBuf::from));
    state.begin_batch();
    let report = analyze_batch(&StemAnalyzer, intake.accepted).await;
    state.finish_batch(&report);
}

fn shown(state: &State) -> Vec<String> {
    state
        .gallery()
        .filtered()
        .map(|r| r.title().to_string())
        .collect()
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("en-US".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    settings.general.language = Some("fr".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[tokio::test]
async fn upload_search_and_show_all() {
    let mut state = state_from(&Config::default());

    upload(&mut state, &["cat.png", "notes.txt", "dog.jpg"]).await;
    assert_eq!(shown(&state), vec!["Cat", "Dog"]);

    let _ = state.handle_message(Message::QueryChanged("CAT".to_string()));
    let (effect, _) = state.handle_message(Message::Search);
    assert_eq!(
        effect,
        Effect::Searched {
            query_len: 3,
            matches: 1
        }
    );
    assert_eq!(shown(&state), vec!["Cat"]);

    // Keywords are searched too.
    let _ = state.handle_message(Message::QueryChanged("animal".to_string()));
    let _ = state.handle_message(Message::Search);
    assert_eq!(shown(&state), vec!["Cat", "Dog"]);

    let _ = state.handle_message(Message::ShowAll);
    assert_eq!(state.query(), "");
    assert_eq!(shown(&state), vec!["Cat", "Dog"]);
}

#[tokio::test]
async fn failed_batch_keeps_earlier_images() {
    let mut state = state_from(&Config::default());
    upload(&mut state, &["cat.png"]).await;

    upload(&mut state, &["dog.png", "broken.png"]).await;
    assert_eq!(shown(&state), vec!["Cat"]);
    assert_eq!(state.error(), Some(BatchError::Discarded));
    assert!(!state.is_loading());
}

#[tokio::test]
async fn keep_successes_policy_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[upload]\nbatch_policy = \"keep-successes\"\n")
        .expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.upload.batch_policy, BatchPolicy::KeepSuccesses);

    let mut state = state_from(&loaded);
    upload(&mut state, &["dog.png", "broken.png", "fox.png"]).await;
    assert_eq!(shown(&state), vec!["Dog", "Fox"]);
    assert_eq!(
        state.error(),
        Some(BatchError::Partial {
            failed: 1,
            total: 3
        })
    );
}
