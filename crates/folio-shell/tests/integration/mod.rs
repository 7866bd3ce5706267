mod contact_flow;
mod listeners;
mod persistence;
