use super::*;
use crate::*;
use tokio::sync::mpsc::*;

/// A response tagged with the sweep that produced it.
type Relayed = (usize, SensitivityResponse);

/// Runs one sensitivity sweep at a time behind a command channel.
///
/// Each sample emits its `result` (when the rebuild succeeded) followed by
/// a `progress` tick. `complete` follows the last sample unless the sweep
/// was cancelled. As with [`SolverWorker`], output of a superseded or
/// cancelled sweep is dropped by the worker.
pub struct SensitivityWorker {
    current: usize,
    control: Control,
    getter: UnboundedReceiver<SensitivityCommand>,
    sender: UnboundedSender<SensitivityResponse>,
    relay: UnboundedSender<Relayed>,
    relayed: UnboundedReceiver<Relayed>,
}

impl SensitivityWorker {
    pub fn spawn() -> (UnboundedSender<SensitivityCommand>, UnboundedReceiver<SensitivityResponse>) {
        let (tx, getter) = unbounded_channel();
        let (sender, rx) = unbounded_channel();
        let (relay, relayed) = unbounded_channel();
        let worker = Self {
            current: 0,
            control: Control::default(),
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
                    Some(command) => self.handle(command),
                    None => break,
                },
                Some((run, response)) = self.relayed.recv() => {
                    if run == self.current {
                        let _ = self.sender.send(response);
                    }
                }
            }
        }
        self.control.cancel();
    }

    fn handle(&mut self, command: SensitivityCommand) {
        match command {
            SensitivityCommand::Cancel => {
                self.control.cancel();
                self.current += 1;
            }
            SensitivityCommand::Start {
                scenario,
                source_node,
                parameter_config,
            } => self.start(scenario, source_node, parameter_config),
        }
    }

    fn start(&mut self, scenario: Scenario, source: Node, config: SweepConfig) {
        log::debug!("sensitivity worker starting {} from {}", config, source.id());
        self.control.cancel();
        self.control = Control::default();
        self.current += 1;
        let run = self.current;
        let control = self.control.clone();
        let relay = self.relay.clone();
        let task = tokio::task::spawn_blocking(move || {
            Self::execute(&scenario, &source, config, &control, |response| {
                let _ = relay.send((run, response));
            })
        });
        let relay = self.relay.clone();
        tokio::spawn(async move {
            let response = match task.await {
                Ok(Ok(())) => return,
                Ok(Err(e)) => SensitivityResponse::from(e),
                Err(e) => SensitivityResponse::Error {
                    message: e.to_string(),
                },
            };
            log::warn!("sweep {} failed: {:?}", run, response);
            let _ = relay.send((run, response));
        });
    }

    fn execute<F>(
        scenario: &Scenario,
        source: &Node,
        config: SweepConfig,
        control: &Control,
        mut emit: F,
    ) -> anyhow::Result<()>
    where
        F: FnMut(SensitivityResponse),
    {
        let sweep = Sweep::new(scenario, source, config)?;
        sweep.run(control, |current, total, result| {
            if let Some(result) = result {
                emit(SensitivityResponse::Result(result.clone()));
            }
            emit(SensitivityResponse::Progress { current, total });
        });
        if !control.is_cancelled() {
            emit(SensitivityResponse::Complete);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ResourceType::*;
    use std::time::Duration;

    async fn next(rx: &mut UnboundedReceiver<SensitivityResponse>) -> SensitivityResponse {
        tokio::time::timeout(Duration::from_secs(30), rx.recv())
            .await
            .expect("worker went quiet")
            .expect("worker hung up")
    }

    fn command(step: Amount) -> SensitivityCommand {
        let scenario = guriko_janken();
        let tree = TreeBuilder::from(&scenario).build().unwrap();
        let source_node = tree.head().unwrap().clone();
        SensitivityCommand::Start {
            scenario,
            source_node,
            parameter_config: SweepConfig {
                resource_type: OpponentHealth,
                min: 10,
                max: 100,
                step,
            },
        }
    }

    #[tokio::test]
    async fn sweep() {
        let (tx, mut rx) = SensitivityWorker::spawn();
        tx.send(command(30)).unwrap();
        let mut values = Vec::new();
        let mut ticks = Vec::new();
        loop {
            match next(&mut rx).await {
                SensitivityResponse::Result(result) => values.push(result.parameter_value),
                SensitivityResponse::Progress { current, total } => ticks.push((current, total)),
                SensitivityResponse::Complete => break,
                SensitivityResponse::Error { message } => panic!("{}", message),
            }
        }
        assert_eq!(values, vec![10, 40, 70, 100]);
        assert_eq!(ticks, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
    }

    #[tokio::test]
    async fn restart() {
        let (tx, mut rx) = SensitivityWorker::spawn();
        tx.send(command(30)).unwrap();
        tx.send(command(45)).unwrap();
        let mut values = Vec::new();
        let mut ticks = Vec::new();
        loop {
            match next(&mut rx).await {
                SensitivityResponse::Result(result) => values.push(result.parameter_value),
                SensitivityResponse::Progress { current, total } => ticks.push((current, total)),
                SensitivityResponse::Complete => break,
                SensitivityResponse::Error { message } => panic!("{}", message),
            }
        }
        assert_eq!(values, vec![10, 55, 100]);
        assert_eq!(ticks, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[tokio::test]
    async fn cancel_is_silent() {
        let (tx, mut rx) = SensitivityWorker::spawn();
        tx.send(command(1)).unwrap();
        tx.send(SensitivityCommand::Cancel).unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn invalid_step() {
        let (tx, mut rx) = SensitivityWorker::spawn();
        tx.send(command(0)).unwrap();
        assert!(matches!(next(&mut rx).await, SensitivityResponse::Error { .. }));
    }
}
