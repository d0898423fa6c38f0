// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{TimeZone, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;

use agent_chat_core::dtos::{
    ConnectionConfig, Thread, ThreadSearchMetadata, ThreadSearchRequest, ThreadStatus,
};
use agent_chat_core::services::ThreadsService;
use agent_chat_core::domain::assistants::services::mocks::MockAssistantService;
use agent_chat_core::domain::threads::services::mocks::MockThreadService;
use agent_chat_core::test::{
    AppContext, AppDependencies, MockAppDependencies, RecordingClientDelegate,
};
use agent_chat_core::ClientEvent;

fn thread(id: &str) -> Thread {
    let date = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

    Thread {
        thread_id: id.to_string(),
        created_at: date,
        updated_at: date,
        metadata: Default::default(),
        status: ThreadStatus::Idle,
        values: Default::default(),
    }
}

#[tokio::test]
async fn test_searches_by_graph_id() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.thread_service
        .expect_search_threads()
        .once()
        .with(
            predicate::always(),
            predicate::eq(ThreadSearchRequest::new(ThreadSearchMetadata::GraphId(
                "agent".to_string(),
            ))),
        )
        .return_once(|_, _| Box::pin(async { Ok(vec![thread("t1"), thread("t2")]) }));

    let service = ThreadsService::from(&deps.into_deps());
    let threads = service.load_threads().await;

    assert_eq!(threads, vec![thread("t1"), thread("t2")]);
    assert_eq!(service.threads(), threads);
    assert!(!service.is_loading());

    Ok(())
}

#[tokio::test]
async fn test_searches_by_assistant_id() -> Result<()> {
    let assistant_id = "fe096781-5601-53d2-b2f6-0d3403f7e9ca";
    let mut deps = MockAppDependencies::default();
    deps.config = ConnectionConfig::new("http://localhost:2024", assistant_id)?;

    deps.thread_service
        .expect_search_threads()
        .once()
        .with(
            predicate::function(|config: &ConnectionConfig| {
                config.api_url.as_str() == "http://localhost:2024/"
            }),
            predicate::eq(ThreadSearchRequest::new(ThreadSearchMetadata::AssistantId(
                assistant_id.to_string(),
            ))),
        )
        .return_once(|_, _| Box::pin(async { Ok(vec![]) }));

    let service = ThreadsService::from(&deps.into_deps());
    assert!(service.load_threads().await.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_failed_search_yields_no_threads() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.thread_service
        .expect_search_threads()
        .once()
        .return_once(|_, _| Box::pin(async { Err(anyhow!("connection refused")) }));

    let service = ThreadsService::from(&deps.into_deps());

    assert!(service.load_threads().await.is_empty());
    assert!(service.threads().is_empty());
    assert!(!service.is_loading());

    Ok(())
}

#[tokio::test]
async fn test_empty_assistant_id_skips_search() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.config = ConnectionConfig::new("http://localhost:2024", "")?;
    deps.thread_service.expect_search_threads().never();

    let service = ThreadsService::from(&deps.into_deps());
    assert!(service.load_threads().await.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_config_change_clears_threads() -> Result<()> {
    let delegate = RecordingClientDelegate::default();
    let mut deps = MockAppDependencies::default();
    deps.delegate = Some(Box::new(delegate.clone()));

    deps.thread_service
        .expect_search_threads()
        .once()
        .return_once(|_, _| Box::pin(async { Ok(vec![thread("t1")]) }));

    let deps = deps.into_deps();
    let service = ThreadsService::from(&deps);

    service.load_threads().await;
    assert_eq!(service.threads().len(), 1);

    // Same target, different key. Threads stay.
    deps.ctx.set_config(
        ConnectionConfig::new("http://localhost:2024", "agent")?
            .with_api_key(Some("secret".to_string())),
    );
    assert_eq!(service.threads().len(), 1);

    deps.ctx
        .set_config(ConnectionConfig::new("http://localhost:2024", "other")?);
    assert!(service.threads().is_empty());

    assert_eq!(
        delegate.events(),
        vec![
            ClientEvent::ThreadsChanged,
            ClientEvent::ConfigChanged,
            ClientEvent::ThreadsChanged
        ]
    );

    Ok(())
}

fn deps_with_context(ctx: Arc<AppContext>, thread_service: MockThreadService) -> AppDependencies {
    AppDependencies {
        assistant_service: Arc::new(MockAssistantService::new()),
        ctx,
        thread_service: Arc::new(thread_service),
    }
}

#[tokio::test]
async fn test_discards_threads_of_previous_connection() -> Result<()> {
    let ctx = Arc::new(AppContext::new(
        ConnectionConfig::new("http://localhost:2024", "agent")?,
        None,
    ));

    let mut thread_service = MockThreadService::new();
    let switching_ctx = ctx.clone();
    thread_service
        .expect_search_threads()
        .once()
        .return_once(move |_, _| {
            Box::pin(async move {
                switching_ctx.set_config(ConnectionConfig::new("http://localhost:2024", "other")?);
                Ok::<_, anyhow::Error>(vec![thread("t1")])
            })
        });

    let service = ThreadsService::from(&deps_with_context(ctx, thread_service));

    assert!(service.load_threads().await.is_empty());
    assert!(service.threads().is_empty());
    assert!(!service.is_loading());

    Ok(())
}

#[tokio::test]
async fn test_stays_loading_while_another_load_is_in_flight() -> Result<()> {
    let ctx = Arc::new(AppContext::new(
        ConnectionConfig::new("http://localhost:2024", "agent")?,
        None,
    ));

    let calls = Arc::new(AtomicUsize::new(0));
    let observing_ctx = ctx.clone();
    let mut thread_service = MockThreadService::new();
    thread_service
        .expect_search_threads()
        .times(2)
        .returning(move |_, _| {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            let ctx = observing_ctx.clone();

            Box::pin(async move {
                // The first load finishes after one yield, the second one after two.
                for _ in 0..=call {
                    tokio::task::yield_now().await;
                }
                if call == 1 {
                    assert!(ctx.threads_loading());
                }
                Ok(vec![])
            })
        });

    let service = ThreadsService::from(&deps_with_context(ctx, thread_service));

    futures::join!(service.load_threads(), service.load_threads());
    assert!(!service.is_loading());

    Ok(())
}
