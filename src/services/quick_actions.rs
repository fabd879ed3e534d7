// src/services/quick_actions.rs
use serde::Serialize;

/// Shortcut button offered by the chat widget.
#[derive(Debug, Clone, Serialize)]
pub struct QuickAction {
    pub id: &'static str,
    pub text: &'static str,
    pub action: &'static str,
    /// Message the widget sends on click.
    pub message: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        id: "1",
        text: "Track Order",
        action: "track_order",
        message: "I'd like to track my order",
    },
    QuickAction {
        id: "2",
        text: "Delivery Issue",
        action: "delivery_issue",
        message: "I'm having a delivery issue",
    },
    QuickAction {
        id: "3",
        text: "Refund Request",
        action: "refund_request",
        message: "I need to request a refund",
    },
    QuickAction {
        id: "4",
        text: "Contact Support",
        action: "contact_support",
        message: "I need to speak with support",
    },
];
