use std::time::Duration;

/// How long a toast stays visible before it auto-dismisses.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn icon_class(self) -> &'static str {
        match self {
            ToastKind::Info => "fas fa-info-circle",
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

/// Single notification slot. A new toast replaces the visible one outright.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ToastSlot {
    current: Option<Toast>,
    last_id: ToastId,
}

impl ToastSlot {
    pub(crate) fn show(&mut self, message: String, kind: ToastKind) -> ToastId {
        self.last_id += 1;
        self.current = Some(Toast {
            id: self.last_id,
            message,
            kind,
        });
        self.last_id
    }

    /// Hides the toast if `id` is still the visible one. Returns whether anything changed.
    pub(crate) fn expire(&mut self, id: ToastId) -> bool {
        match &self.current {
            Some(toast) if toast.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
