mod directory_flow;
mod http_flow;
