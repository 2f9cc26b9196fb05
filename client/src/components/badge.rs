//! Status badge: a closed status vocabulary mapped to a pill and a dot.

use leptos::prelude::*;

use inventory::{ConnectionStatus, HealthStatus, NodeStatus, PoolStatus, TaskStatus};

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusValue {
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
    Info,
    Primary,
}

impl StatusValue {
    pub const ALL: [Self; 6] = [Self::Success, Self::Warning, Self::Error, Self::Neutral, Self::Info, Self::Primary];

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Success => "bg-emerald-50 text-emerald-700 border-emerald-200/60",
            Self::Warning => "bg-amber-50 text-amber-700 border-amber-200/60",
            Self::Error => "bg-red-50 text-red-700 border-red-200/60",
            Self::Neutral => "bg-slate-50 text-slate-600 border-slate-200/60",
            Self::Info => "bg-blue-50 text-blue-700 border-blue-200/60",
            Self::Primary => "bg-primary-50 text-primary-700 border-primary-200/60",
        }
    }

    #[must_use]
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Success => "bg-emerald-500",
            Self::Warning => "bg-amber-500",
            Self::Error => "bg-red-500",
            Self::Neutral => "bg-slate-400",
            Self::Info => "bg-blue-500",
            Self::Primary => "bg-primary-500",
        }
    }
}

impl From<PoolStatus> for StatusValue {
    fn from(status: PoolStatus) -> Self {
        match status {
            PoolStatus::Active => Self::Success,
            PoolStatus::Disabled => Self::Neutral,
        }
    }
}

impl From<HealthStatus> for StatusValue {
    fn from(status: HealthStatus) -> Self {
        match status {
            HealthStatus::Healthy => Self::Success,
            HealthStatus::Warning => Self::Warning,
            HealthStatus::Critical => Self::Error,
        }
    }
}

impl From<ConnectionStatus> for StatusValue {
    fn from(status: ConnectionStatus) -> Self {
        match status {
            ConnectionStatus::Online => Self::Success,
            ConnectionStatus::Maintenance => Self::Warning,
            ConnectionStatus::Offline => Self::Neutral,
        }
    }
}

impl From<TaskStatus> for StatusValue {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Running => Self::Primary,
            TaskStatus::Pending => Self::Warning,
            TaskStatus::Completed => Self::Success,
            TaskStatus::Failed => Self::Error,
            TaskStatus::Cancelled | TaskStatus::Paused => Self::Neutral,
        }
    }
}

impl From<NodeStatus> for StatusValue {
    fn from(status: NodeStatus) -> Self {
        match status {
            NodeStatus::Ready => Self::Success,
            NodeStatus::Warning => Self::Warning,
            NodeStatus::NotReady => Self::Error,
        }
    }
}

/// Full class list of the badge pill.
#[must_use]
pub fn badge_classes(status: StatusValue) -> String {
    format!(
        "inline-flex items-center gap-1.5 px-2 py-0.5 rounded-md border text-[10px] font-bold uppercase tracking-wider {}",
        status.badge_class()
    )
}

#[component]
pub fn Badge(
    #[prop(into)] status: Signal<StatusValue>,
    #[prop(default = true)] show_dot: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=move || badge_classes(status.get())>
            {show_dot
                .then(|| {
                    view! {
                        <span class=move || format!("w-1.5 h-1.5 rounded-full {}", status.get().dot_class())></span>
                    }
                })}
            {children()}
        </span>
    }
}
