mod contact_routes;
mod cors;
mod http_mailer;
