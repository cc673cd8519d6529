//! Reasoning tree use case
//!
//! Recursively decomposes content into sub-points, dispatching a
//! [`ReasoningAgent`] per sub-point (or a nested tree) up to the configured
//! depth ceiling, then merges child results upward by return value — no
//! shared mutable tree, so concurrent branches cannot race.
//!
//! `max_depth` is the only termination guarantee. A decomposition response
//! in an unrecognized shape, a decomposition failure, or an empty sub-point
//! list all fall back to the base case for that branch; nothing recurses on
//! malformed output.

use crate::config::CouncilConfig;
use crate::ports::critique_generator::{CritiqueContext, CritiqueGenerator};
use crate::use_cases::reasoning_agent::ReasoningAgent;
use council_domain::{
    AgentError, AgentErrorKind, AgentPerspective, AgentResult, TreePath, parse_decomposition,
};
use futures::future::BoxFuture;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Recursive decomposition driver for one perspective
pub struct ReasoningTree<G: CritiqueGenerator + 'static> {
    generator: Arc<G>,
    config: CouncilConfig,
}

impl<G: CritiqueGenerator + 'static> ReasoningTree<G> {
    pub fn new(generator: Arc<G>, config: CouncilConfig) -> Self {
        Self { generator, config }
    }

    /// Evaluate the full tree for one perspective
    ///
    /// With `max_depth = 0` this is exactly one agent run on the full
    /// content — no decomposition call is made at all.
    pub async fn evaluate(&self, content: &str, perspective: &AgentPerspective) -> AgentResult {
        Self::node(
            Arc::clone(&self.generator),
            self.config.clone(),
            Arc::new(content.to_string()),
            Arc::new(perspective.clone()),
            TreePath::root(),
            None,
        )
        .await
    }

    /// One tree node: decompose-and-recurse, or run a single agent
    ///
    /// Returns a boxed future because the recursion would otherwise make
    /// the future type infinite.
    fn node(
        generator: Arc<G>,
        config: CouncilConfig,
        content: Arc<String>,
        perspective: Arc<AgentPerspective>,
        path: TreePath,
        assigned_point: Option<String>,
    ) -> BoxFuture<'static, AgentResult> {
        Box::pin(async move {
            if path.depth() >= config.max_depth {
                return Self::base_case(generator, &config, &content, &perspective, path, assigned_point)
                    .await;
            }

            // Decompose the branch target: the assigned sub-point when we
            // are already inside the tree, the full content at the root.
            let target = assigned_point.as_deref().unwrap_or(content.as_str());
            let sub_points = match generator.decompose(target, &perspective).await {
                Ok(value) => match parse_decomposition(&value) {
                    Ok(points) => points,
                    Err(e) => {
                        warn!(
                            perspective = %perspective.id,
                            path = %path,
                            "decomposition shape invalid, falling back to base case: {}",
                            e
                        );
                        let mut result = Self::base_case(
                            generator,
                            &config,
                            &content,
                            &perspective,
                            path,
                            assigned_point,
                        )
                        .await;
                        result.errors.push(AgentError::new(
                            &perspective.id,
                            AgentErrorKind::Decomposition,
                            e.to_string(),
                        ));
                        return result;
                    }
                },
                Err(e) => {
                    warn!(
                        perspective = %perspective.id,
                        path = %path,
                        "decomposition call failed, falling back to base case: {}",
                        e
                    );
                    let class = e.failure_class();
                    let detail = format!("decomposition: {}", e);
                    let mut result = Self::base_case(
                        generator,
                        &config,
                        &content,
                        &perspective,
                        path,
                        assigned_point,
                    )
                    .await;
                    result
                        .errors
                        .push(AgentError::new(&perspective.id, class, detail));
                    return result;
                }
            };

            if sub_points.is_empty() {
                // zero sub-points means nothing to split; treat as depth
                // exhausted rather than recursing on empty output
                debug!(perspective = %perspective.id, path = %path, "empty decomposition");
                return Self::base_case(generator, &config, &content, &perspective, path, assigned_point)
                    .await;
            }

            debug!(
                perspective = %perspective.id,
                path = %path,
                branches = sub_points.len(),
                "decomposed"
            );

            // Fan out one branch per sub-point. Branches are independent
            // and run concurrently; results are re-ordered by sub-point
            // index before merging, so completion order never leaks into
            // claim order.
            let mut join_set = JoinSet::new();
            for (index, point) in sub_points.into_iter().enumerate() {
                let child = Self::node(
                    Arc::clone(&generator),
                    config.clone(),
                    Arc::clone(&content),
                    Arc::clone(&perspective),
                    path.child(index),
                    Some(point),
                );
                join_set.spawn(async move { (index, child.await) });
            }

            let mut children: Vec<(usize, AgentResult)> = Vec::new();
            while let Some(joined) = join_set.join_next().await {
                match joined {
                    Ok(indexed) => children.push(indexed),
                    Err(e) => warn!("branch task join error: {}", e),
                }
            }
            children.sort_by_key(|(index, _)| *index);

            // Merge upward: concatenate claims in sub-point order, OR the
            // self-critique flags, collect every branch's errors.
            let mut merged = AgentResult::success(&perspective.id, Vec::new());
            for (_, child) in children {
                merged.claims.extend(child.claims);
                merged.self_critique_applied |= child.self_critique_applied;
                merged.errors.extend(child.errors);
            }
            merged
        })
    }

    /// Base case: one agent run on this branch's assigned content
    async fn base_case(
        generator: Arc<G>,
        config: &CouncilConfig,
        content: &str,
        perspective: &AgentPerspective,
        path: TreePath,
        assigned_point: Option<String>,
    ) -> AgentResult {
        let context = CritiqueContext {
            assigned_point,
            tree_path: path,
        };
        let mut agent = ReasoningAgent::new(generator, config.self_critique);
        agent.run(content, perspective, Some(&context)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::critique_generator::GeneratorError;
    use async_trait::async_trait;
    use council_domain::{ArbiterVerdict, Claim, ClaimRevision, DraftClaim};
    use serde_json::json;
    use std::sync::Mutex;

    /// Fake generator that decomposes once at the root and critiques leaves.
    struct TreeFake {
        decomposition: serde_json::Value,
        fail_decompose: bool,
        critique_calls: Mutex<Vec<Option<String>>>,
    }

    impl TreeFake {
        fn new(decomposition: serde_json::Value) -> Self {
            Self {
                decomposition,
                fail_decompose: false,
                critique_calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CritiqueGenerator for TreeFake {
        async fn critique(
            &self,
            _content: &str,
            _perspective: &AgentPerspective,
            context: Option<&CritiqueContext>,
        ) -> Result<Vec<DraftClaim>, GeneratorError> {
            let assigned = context.and_then(|c| c.assigned_point.clone());
            self.critique_calls.lock().unwrap().push(assigned.clone());
            let text = assigned.unwrap_or_else(|| "root claim".to_string());
            Ok(vec![DraftClaim::new(format!("issue with {}", text)).with_confidence(0.6)])
        }

        async fn self_critique(
            &self,
            _content: &str,
            _perspective: &AgentPerspective,
            _claims: &[Claim],
        ) -> Result<Vec<ClaimRevision>, GeneratorError> {
            Ok(Vec::new())
        }

        async fn decompose(
            &self,
            _content: &str,
            _perspective: &AgentPerspective,
        ) -> Result<serde_json::Value, GeneratorError> {
            if self.fail_decompose {
                Err(GeneratorError::Provider("decompose unavailable".into()))
            } else {
                Ok(self.decomposition.clone())
            }
        }

        async fn arbitrate(
            &self,
            _content: &str,
            _claims: &[Claim],
            _cohort: &str,
        ) -> Result<ArbiterVerdict, GeneratorError> {
            Ok(ArbiterVerdict::new(vec![], 50))
        }
    }

    fn perspective() -> AgentPerspective {
        AgentPerspective::new("logician", "The Logician", "Logical Rigor", "...")
    }

    fn config(max_depth: usize) -> CouncilConfig {
        CouncilConfig::default()
            .with_max_depth(max_depth)
            .without_self_critique()
    }

    #[tokio::test]
    async fn test_max_depth_zero_is_flat() {
        let generator = Arc::new(TreeFake::new(json!(["a", "b"])));
        let tree = ReasoningTree::new(Arc::clone(&generator), config(0));

        let result = tree.evaluate("content", &perspective()).await;

        // exactly one agent call on the full content, no decomposition
        assert_eq!(result.claims.len(), 1);
        assert!(result.claims[0].tree_path.is_root());
        let calls = generator.critique_calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[None]);
    }

    #[tokio::test]
    async fn test_depth_one_fans_out_per_sub_point() {
        let generator = Arc::new(TreeFake::new(json!(["premise one", "premise two"])));
        let tree = ReasoningTree::new(Arc::clone(&generator), config(1));

        let result = tree.evaluate("content", &perspective()).await;

        assert_eq!(result.claims.len(), 2);
        // claims ordered by sub-point index regardless of completion order
        assert_eq!(result.claims[0].tree_path.to_string(), "0");
        assert_eq!(result.claims[1].tree_path.to_string(), "1");
        assert!(result.claims[0].claim_text.contains("premise one"));
        assert!(result.claims[1].claim_text.contains("premise two"));
        // ids are branch-scoped, no collisions
        assert_eq!(result.claims[0].id.as_str(), "logician-0-c0");
        assert_eq!(result.claims[1].id.as_str(), "logician-1-c0");
    }

    #[tokio::test]
    async fn test_object_decomposition_topics_key() {
        let generator = Arc::new(TreeFake::new(json!({"topics": ["x", "y", "z"]})));
        let tree = ReasoningTree::new(generator, config(1));

        let result = tree.evaluate("content", &perspective()).await;
        assert_eq!(result.claims.len(), 3);
    }

    #[tokio::test]
    async fn test_unexpected_shape_falls_back_to_base_case() {
        let generator = Arc::new(TreeFake::new(json!({"unexpected_key": ["a", "b"]})));
        let tree = ReasoningTree::new(Arc::clone(&generator), config(1));

        let result = tree.evaluate("content", &perspective()).await;

        // single root-level agent call instead of recursion
        assert_eq!(result.claims.len(), 1);
        assert!(result.claims[0].tree_path.is_root());
        assert!(
            result
                .errors
                .iter()
                .any(|e| e.kind == AgentErrorKind::Decomposition)
        );
    }

    #[tokio::test]
    async fn test_decompose_call_failure_falls_back() {
        let mut fake = TreeFake::new(json!([]));
        fake.fail_decompose = true;
        let tree = ReasoningTree::new(Arc::new(fake), config(1));

        let result = tree.evaluate("content", &perspective()).await;

        assert_eq!(result.claims.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].detail.contains("decomposition"));
    }

    #[tokio::test]
    async fn test_empty_decomposition_treated_as_exhausted() {
        let generator = Arc::new(TreeFake::new(json!([])));
        let tree = ReasoningTree::new(generator, config(1));

        let result = tree.evaluate("content", &perspective()).await;

        assert_eq!(result.claims.len(), 1);
        assert!(result.claims[0].tree_path.is_root());
        assert!(result.errors.is_empty());
    }

    #[tokio::test]
    async fn test_depth_two_nests() {
        // every decompose call returns two sub-points; depth 2 means
        // 2 branches at level 0, each decomposing into 2 leaves
        let generator = Arc::new(TreeFake::new(json!(["left", "right"])));
        let tree = ReasoningTree::new(generator, config(2));

        let result = tree.evaluate("content", &perspective()).await;

        assert_eq!(result.claims.len(), 4);
        let paths: Vec<String> = result
            .claims
            .iter()
            .map(|c| c.tree_path.to_string())
            .collect();
        assert_eq!(paths, vec!["0.0", "0.1", "1.0", "1.1"]);
    }
}
