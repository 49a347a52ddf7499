use std::fmt;
use std::io::Write;
use std::rc::Rc;

use crate::config::RuntimeConfig;
use crate::context::ExecutionContext;
use crate::diagnostics::TraceFormat;

type SinkFactory = dyn Fn() -> Box<dyn Write>;

#[derive(Clone, Default)]
pub struct Engine {
    config: RuntimeConfig,
    echo_sink: Option<Rc<SinkFactory>>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: RuntimeConfig) -> Self {
        Self {
            config,
            echo_sink: None,
        }
    }

    pub fn with_max_call_depth(mut self, max: usize) -> Self {
        self.config.max_call_depth = max;
        self
    }

    pub fn with_trace_format(mut self, format: TraceFormat) -> Self {
        self.config.trace_format = format;
        self
    }

    /// Echo program output and reports to a writer made by `make_sink`,
    /// one writer per context, instead of process stdout.
    pub fn with_echo_sink<F, W>(mut self, make_sink: F) -> Self
    where
        F: Fn() -> W + 'static,
        W: Write + 'static,
    {
        self.echo_sink = Some(Rc::new(move || Box::new(make_sink()) as Box<dyn Write>));
        self
    }

    pub fn new_context(&self) -> ExecutionContext {
        let mut ctx = ExecutionContext::from_config(&self.config);
        if let Some(make_sink) = &self.echo_sink {
            ctx.set_echo_sink(make_sink());
        }
        ctx
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("echo_sink", &self.echo_sink.is_some())
            .finish()
    }
}
