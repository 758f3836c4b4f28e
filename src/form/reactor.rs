use tokio::sync::mpsc;
use tracing::{debug, info};

use super::effects::SideEffect;
use super::event::FormEvent;
use super::state::{FormDelta, FormState};
use crate::catalog::Category;
use crate::resolver::{Resolve, Resolver};

pub struct Configurator {
    pub receiver: mpsc::Receiver<FormEvent>,
    pub state: FormState,
    resolver: Resolver,
    submissions: u64,
}

impl Configurator {
    pub fn new(receiver: mpsc::Receiver<FormEvent>, resolver: Resolver) -> Self {
        Self {
            receiver,
            state: FormState::new(),
            resolver,
            submissions: 0,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    /// Pure step: applies a batch of events in order and returns the side
    /// effects for the caller to render. Never awaits.
    pub fn step(&mut self, events: Vec<FormEvent>) -> Vec<SideEffect> {
        let mut effects = Vec::new();

        for event in events {
            match event {
                FormEvent::Select { category, value } => {
                    self.select(category, value, &mut effects);
                }
                FormEvent::Clear(category) => {
                    self.clear(category, &mut effects);
                }
                FormEvent::Submit => {
                    let resolution = self.resolver.resolve(self.state.selection());
                    self.submissions += 1;
                    debug!(
                        version = self.state.version,
                        error = resolution.is_error(),
                        "submit resolved"
                    );
                    effects.push(SideEffect::from(&resolution));
                    self.state.reduce(FormDelta::Submitted(resolution));
                }
                FormEvent::Reset => {
                    let had_result = self.state.result().is_some();
                    self.state.reduce(FormDelta::Reset);
                    if had_result {
                        effects.push(SideEffect::ClearResult);
                    }
                    effects.push(SideEffect::Log("Form reset.".to_string()));
                }
                FormEvent::ShowOptions(category) => {
                    effects.push(SideEffect::ListOptions {
                        category,
                        enabled: self.is_enabled(category),
                        options: category.options().to_vec(),
                    });
                }
            }
        }

        effects
    }

    fn is_enabled(&self, category: Category) -> bool {
        self.resolver.fields().contains(&category)
            && self.state.field_enabled(self.resolver.cascade(), category)
    }

    fn select(&mut self, category: Category, value: String, effects: &mut Vec<SideEffect>) {
        if !self.resolver.fields().contains(&category) {
            effects.push(SideEffect::Log(format!(
                "'{category}' is not part of this form."
            )));
            return;
        }
        if !self.state.field_enabled(self.resolver.cascade(), category) {
            effects.push(SideEffect::Log(format!(
                "'{category}' is locked until the fields before it are chosen."
            )));
            return;
        }
        // A picker only offers its own options.
        if !category.accepts(&value) {
            effects.push(SideEffect::Log(format!(
                "'{value}' is not an option for '{category}'."
            )));
            return;
        }
        if self.state.selection().get(category) == Some(value.as_str()) {
            return;
        }

        self.change(category, Some(value), effects);
    }

    fn clear(&mut self, category: Category, effects: &mut Vec<SideEffect>) {
        if !self.state.selection().is_set(category) {
            return;
        }
        self.change(category, None, effects);

        // Fields after a cleared one in the cascade become locked, drop them too.
        let cascade = self.resolver.cascade();
        if let Some(idx) = cascade.iter().position(|c| *c == category) {
            let downstream: Vec<Category> = cascade[idx + 1..]
                .iter()
                .copied()
                .filter(|c| self.state.selection().is_set(*c))
                .collect();
            for later in downstream {
                self.change(later, None, effects);
            }
        }
    }

    fn change(&mut self, category: Category, value: Option<String>, effects: &mut Vec<SideEffect>) {
        let had_result = self.state.result().is_some();
        debug!(%category, ?value, "field changed");
        self.state.reduce(FormDelta::FieldChanged { category, value });
        if had_result {
            effects.push(SideEffect::ClearResult);
        }
    }

    /// Async driver loop. Drains whatever is queued, steps, hands effects to
    /// `render`. Returns once every sender is dropped.
    pub async fn run<F>(&mut self, mut render: F)
    where
        F: FnMut(SideEffect),
    {
        info!("Configurator started ({:?} strategy)", self.resolver.kind());

        while let Some(first) = self.receiver.recv().await {
            let mut events = vec![first];
            while let Ok(event) = self.receiver.try_recv() {
                events.push(event);
            }

            for effect in self.step(events) {
                render(effect);
            }
        }

        info!(
            submissions = self.submissions,
            "Input closed, configurator stopped"
        );
    }
}
