use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use fluency_coach::application::ports::ChatProfile;
use fluency_coach::application::services::PracticeController;
use fluency_coach::infrastructure::audio::{
    LocalAudioWorkspace, OpenAiSpeechSynthesizer, OpenAiWhisperEngine,
};
use fluency_coach::infrastructure::llm::OpenAiChatClient;
use fluency_coach::infrastructure::observability::{TracingConfig, init_tracing};
use fluency_coach::infrastructure::persistence::InMemorySessionStore;
use fluency_coach::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    );

    if settings.llm.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; upstream calls will be rejected");
    }

    let http_client = reqwest::Client::new();

    let conversation_llm = Arc::new(OpenAiChatClient::new(
        http_client.clone(),
        &settings.llm.base_url,
        settings.llm.api_key.clone(),
        ChatProfile::conversation(
            settings.llm.chat_model.clone(),
            settings.llm.conversation_temperature,
            settings.memory.max_token_limit,
        ),
    ));
    let evaluation_llm = Arc::new(OpenAiChatClient::new(
        http_client.clone(),
        &settings.llm.base_url,
        settings.llm.api_key.clone(),
        ChatProfile::evaluation(
            settings.llm.chat_model.clone(),
            settings.llm.evaluation_temperature,
        ),
    ));

    let transcription_engine = Arc::new(OpenAiWhisperEngine::new(
        http_client.clone(),
        settings.llm.api_key.clone(),
        Some(settings.llm.base_url.clone()),
        Some(settings.speech.transcription_model.clone()),
        Some(settings.speech.language.clone()),
    ));
    let synthesizer = Arc::new(OpenAiSpeechSynthesizer::new(
        http_client,
        settings.llm.api_key.clone(),
        Some(settings.llm.base_url.clone()),
        Some(settings.speech.tts_model.clone()),
        Some(settings.speech.voice.clone()),
    ));
    let audio = Arc::new(LocalAudioWorkspace::new(
        settings.audio.input_dir.clone(),
        settings.audio.output_dir.clone(),
    )?);

    let controller = Arc::new(PracticeController::new(
        conversation_llm,
        evaluation_llm,
        transcription_engine,
        synthesizer,
        audio,
    ));

    let state = AppState {
        controller,
        sessions: Arc::new(InMemorySessionStore::new()),
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(address = %addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
