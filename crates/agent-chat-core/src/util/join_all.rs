// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;

/// Awaits all futures and returns their outputs in input order, regardless of the order in
/// which they complete. Reads run concurrently in production and serially under the `test`
/// feature so that tests observe a stable call order.
pub async fn join_all<I>(iter: I) -> Vec<<I::Item as Future>::Output>
where
    I: IntoIterator,
    I::Item: Future,
{
    #[cfg(feature = "test")]
    {
        let mut results = Vec::new();
        for future in iter.into_iter() {
            results.push(future.await);
        }
        results
    }
    #[cfg(not(feature = "test"))]
    {
        futures::future::join_all(iter).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    use crate::domain::attachments::models::{FileReadError, PendingFile};
    use crate::domain::attachments::services::encode_file;

    /// Yields `delay` times before returning its contents.
    struct SlowFile {
        name: String,
        delay: usize,
        completed: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl PendingFile for SlowFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn media_type(&self) -> String {
            "text/plain".to_string()
        }

        fn size(&self) -> u64 {
            1
        }

        fn last_modified(&self) -> i64 {
            0
        }

        async fn read_bytes(&self) -> Result<Vec<u8>, FileReadError> {
            for _ in 0..self.delay {
                tokio::task::yield_now().await;
            }
            self.completed.lock().push(self.name.clone());
            Ok(vec![b'x'])
        }
    }

    #[tokio::test]
    async fn test_concurrent_reads_keep_input_order() {
        let completed = Arc::new(Mutex::new(vec![]));
        let files = ["a.txt", "b.txt", "c.txt"]
            .iter()
            .enumerate()
            .map(|(idx, name)| SlowFile {
                name: name.to_string(),
                delay: 3 - idx,
                completed: completed.clone(),
            })
            .collect::<Vec<_>>();

        let blocks = futures::future::join_all(files.iter().map(|file| encode_file(file))).await;

        assert_eq!(*completed.lock(), vec!["c.txt", "b.txt", "a.txt"]);

        let names = blocks
            .into_iter()
            .map(|block| block.unwrap().file_name().unwrap_or_default().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }
}
