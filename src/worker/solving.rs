use super::*;
use crate::*;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::sync::mpsc::*;

/// A response tagged with the run that produced it.
type Relayed = (usize, SolverResponse);

/// Runs one solver at a time behind a command channel.
///
/// - `start` cancels any run in flight and solves the new tree on the
///   blocking pool
/// - `pause`, `resume` and `cancel` flip the shared [`Control`], which a
///   CFR run observes between batches
/// - strategy queries answer from the latest snapshot, refreshed after
///   every batch and once more on completion
///
/// Runs report back through the worker, which forwards only what the
/// current run says. Whatever a superseded or cancelled run emits after
/// `start` or `cancel` is processed never reaches the host.
pub struct SolverWorker {
    kind: SolverKind,
    current: usize,
    control: Control,
    snapshot: Arc<RwLock<Strategies>>,
    getter: UnboundedReceiver<SolverCommand>,
    sender: UnboundedSender<SolverResponse>,
    relay: UnboundedSender<Relayed>,
    relayed: UnboundedReceiver<Relayed>,
}

impl SolverWorker {
    pub fn spawn(kind: SolverKind) -> (UnboundedSender<SolverCommand>, UnboundedReceiver<SolverResponse>) {
        let (tx, getter) = unbounded_channel();
        let (sender, rx) = unbounded_channel();
        let (relay, relayed) = unbounded_channel();
        let worker = Self {
            kind,
            current: 0,
            control: Control::default(),
            snapshot: Arc::default(),
            getter,
            sender,
            relay,
            relayed,
        };
        tokio::spawn(worker.run());
        (tx, rx)
    }

    async fn run(mut self) {
        loop {
            tokio::select! {
                command = self.getter.recv() => match command {
                    Some(command) => self.handle(command).await,
                    None => break,
                },
                Some((run, response)) = self.relayed.recv() => {
                    if run == self.current {
                        let _ = self.sender.send(response);
                    } else {
                        log::trace!("dropping response of superseded run {}", run);
                    }
                }
            }
        }
        self.control.cancel();
    }

    async fn handle(&mut self, command: SolverCommand) {
        log::debug!("{} worker received {}", self.kind, command);
        match command {
            SolverCommand::Start { game_tree, iterations } => self.start(game_tree, iterations),
            SolverCommand::Pause => self.control.pause(),
            SolverCommand::Resume => self.control.resume(),
            SolverCommand::Cancel => {
                self.control.cancel();
                self.current += 1;
            }
            SolverCommand::GetStrategy { node_id } => {
                let data = self.snapshot.read().await.get(&node_id).cloned();
                let _ = self.sender.send(SolverResponse::Strategy { node_id, data });
            }
            SolverCommand::GetAllStrategies => {
                let strategies = self.snapshot.read().await.clone();
                let _ = self.sender.send(SolverResponse::AllStrategies { strategies });
            }
        }
    }

    fn start(&mut self, tree: GameTree, iterations: Option<usize>) {
        self.control.cancel();
        self.control = Control::default();
        self.snapshot = Arc::default();
        self.current += 1;
        let run = self.current;
        let kind = self.kind;
        let control = self.control.clone();
        let snapshot = self.snapshot.clone();
        let relay = self.relay.clone();
        let task = tokio::task::spawn_blocking(move || {
            Self::execute(kind, &tree, iterations, &control, &snapshot, |response| {
                let _ = relay.send((run, response));
            })
        });
        let relay = self.relay.clone();
        tokio::spawn(async move {
            let response = match task.await {
                Ok(Ok(())) => return,
                Ok(Err(e)) => SolverResponse::from(e),
                Err(e) => SolverResponse::Error {
                    message: e.to_string(),
                },
            };
            log::warn!("{} run {} failed: {:?}", kind, run, response);
            let _ = relay.send((run, response));
        });
    }

    fn execute<F>(
        kind: SolverKind,
        tree: &GameTree,
        iterations: Option<usize>,
        control: &Control,
        snapshot: &RwLock<Strategies>,
        mut emit: F,
    ) -> anyhow::Result<()>
    where
        F: FnMut(SolverResponse),
    {
        anyhow::ensure!(
            tree.head().is_some(),
            "root node {} is missing from the tree",
            tree.root()
        );
        let strategies = match kind {
            SolverKind::Lp => LpSolver::solve(tree).strategies(),
            SolverKind::Cfr => {
                let mut solver = CfrSolver::from(tree);
                let iterations = iterations.unwrap_or(CFR_ITERATIONS);
                let finished = solver.run(iterations, control, |solver, progress| {
                    *snapshot.blocking_write() = solver.strategies();
                    emit(SolverResponse::from(progress));
                });
                if !finished {
                    return Ok(());
                }
                solver.strategies()
            }
        };
        if control.is_cancelled() {
            return Ok(());
        }
        *snapshot.blocking_write() = strategies.clone();
        emit(SolverResponse::Complete { strategies });
        Ok(())
    }
}
