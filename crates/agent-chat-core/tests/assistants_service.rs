// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{anyhow, Result};
use chrono::Utc;
use mockall::predicate;
use pretty_assertions::assert_eq;

use agent_chat_core::dtos::{Assistant, CreateAssistantRequest, IfExists};
use agent_chat_core::services::AssistantsService;
use agent_chat_core::test::MockAppDependencies;

#[tokio::test]
async fn test_creates_default_assistant() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.assistant_service
        .expect_create_assistant()
        .once()
        .with(
            predicate::always(),
            predicate::eq(CreateAssistantRequest {
                graph_id: "agent".to_string(),
                name: "default-assistant".to_string(),
                description: "Default assistant created from UI".to_string(),
                assistant_id: None,
                if_exists: IfExists::DoNothing,
            }),
        )
        .return_once(|_, _| {
            Box::pin(async {
                Ok(Assistant {
                    assistant_id: "a1".to_string(),
                    graph_id: "agent".to_string(),
                    name: Some("default-assistant".to_string()),
                    description: None,
                    config: Default::default(),
                    metadata: Default::default(),
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
            })
        });

    let service = AssistantsService::from(&deps.into_deps());
    let assistant = service.create_assistant(None).await?;

    assert_eq!(assistant.assistant_id, "a1");

    Ok(())
}

#[tokio::test]
async fn test_propagates_failure() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.assistant_service
        .expect_create_assistant()
        .once()
        .with(
            predicate::always(),
            predicate::function(|req: &CreateAssistantRequest| {
                req.assistant_id.as_deref() == Some("support") && req.name == "support"
            }),
        )
        .return_once(|_, _| Box::pin(async { Err(anyhow!("422 Unprocessable Entity")) }));

    let service = AssistantsService::from(&deps.into_deps());
    assert!(service
        .create_assistant(Some("support".to_string()))
        .await
        .is_err());

    Ok(())
}
