//! Fixed pool of workers draining the catalog queue.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinSet;

use super::transform::{transform_one, TransformContext};

/// A fixed number of concurrent workers pulling work items from one shared
/// queue.
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Run every queued item to completion and return the processed count.
    ///
    /// All items are enqueued and the queue is closed before the workers
    /// start, so each worker loops until the queue reports closed-and-drained.
    /// This call returns only after every worker has finished its in-flight
    /// item — a join, not fire-and-forget. Per-item failures are logged and
    /// skipped; one bad file never stalls the batch.
    pub async fn run(&self, files: Vec<PathBuf>, ctx: Arc<TransformContext>) -> u64 {
        let (tx, rx) = async_channel::unbounded::<PathBuf>();
        for file in files {
            // Unbounded queue with a live receiver: send cannot fail here
            let _ = tx.send(file).await;
        }
        drop(tx);

        let mut workers = JoinSet::new();
        for worker_id in 0..self.workers {
            let rx = rx.clone();
            let ctx = Arc::clone(&ctx);
            workers.spawn(async move {
                while let Ok(path) = rx.recv().await {
                    let blocking_ctx = Arc::clone(&ctx);
                    let item = path.clone();
                    let result =
                        tokio::task::spawn_blocking(move || transform_one(&item, &blocking_ctx))
                            .await;
                    match result {
                        Ok(Ok(out_path)) => {
                            tracing::debug!(worker_id, "{:?} -> {:?}", path, out_path);
                        }
                        Ok(Err(e)) => {
                            tracing::error!(worker_id, "Skipping {:?}: {}", path, e);
                        }
                        Err(e) => {
                            tracing::error!(worker_id, "Transform task died for {:?}: {}", path, e);
                        }
                    }
                }
            });
        }

        while workers.join_next().await.is_some() {}
        ctx.processed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::sequence::SequenceGenerator;
    use image::{ImageFormat, RgbImage};
    use std::collections::BTreeSet;

    fn fixture_context(dest: &std::path::Path) -> Arc<TransformContext> {
        Arc::new(TransformContext::new(
            SequenceGenerator::new("out-$$.jpg", 0, 1),
            None,
            dest.to_path_buf(),
            64,
            48,
        ))
    }

    fn write_images(dir: &std::path::Path, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let path = dir.join(format!("src-{i:02}.jpg"));
                RgbImage::new(30, 20)
                    .save_with_format(&path, ImageFormat::Jpeg)
                    .unwrap();
                path
            })
            .collect()
    }

    #[tokio::test]
    async fn test_pool_processes_everything_before_returning() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let files = write_images(source.path(), 7);

        let ctx = fixture_context(dest.path());
        let processed = WorkerPool::new(3).run(files, Arc::clone(&ctx)).await;

        assert_eq!(processed, 7);
        let written: BTreeSet<String> = std::fs::read_dir(dest.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        let expected: BTreeSet<String> = (0..7).map(|i| format!("out-{i}.jpg")).collect();
        assert_eq!(written, expected);
    }

    #[tokio::test]
    async fn test_pool_skips_bad_files_and_keeps_draining() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let mut files = write_images(source.path(), 3);
        let corrupt = source.path().join("broken.jpg");
        std::fs::write(&corrupt, b"garbage").unwrap();
        files.insert(1, corrupt);

        let ctx = fixture_context(dest.path());
        let processed = WorkerPool::new(2).run(files, ctx).await;

        assert_eq!(processed, 3);
        // Four sequence values were claimed; three outputs exist
        assert_eq!(std::fs::read_dir(dest.path()).unwrap().count(), 3);
    }

    #[tokio::test]
    async fn test_pool_with_empty_queue_returns_zero() {
        let dest = tempfile::tempdir().unwrap();
        let ctx = fixture_context(dest.path());
        let processed = WorkerPool::new(3).run(Vec::new(), ctx).await;
        assert_eq!(processed, 0);
    }
}
