use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use ticketera_adapters::{
    auth::JwtAuthConfig,
    config::AllowedOrigins,
    http::routes::{
        create_ticket, delete_ticket, get_ticket, list_tickets, login, register, update_ticket,
        verify_token,
    },
};
use ticketera_core::{PasswordHasher, TicketStore, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The assembled ticketing service: auth routes plus the ticket CRUD surface.
pub struct TicketeraService {
    router: Router,
}

impl TicketeraService {
    /// Wire the routes to their stores.
    ///
    /// # Note on Architecture
    /// Stores implement Clone via an internal Arc (or pool handle) for
    /// thread-safe sharing. Each route is given exactly the state it needs.
    pub fn new<U, T, H>(
        user_store: U,
        ticket_store: T,
        password_hasher: H,
        jwt_config: JwtAuthConfig,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        T: TicketStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
    {
        let router = Router::new()
            // Register needs the user store and the hasher
            .route("/auth/register", post(register::<U, H>))
            .with_state((user_store.clone(), password_hasher.clone()))
            // Login additionally signs a token
            .route("/auth/login", post(login::<U, H>))
            .with_state((user_store, password_hasher, jwt_config.clone()))
            // Token verification only needs the signing config
            .route("/auth/verify-token", post(verify_token))
            .with_state(jwt_config)
            // Ticket collection routes
            .route(
                "/tickets/",
                get(list_tickets::<T>).post(create_ticket::<T>),
            )
            .with_state(ticket_store.clone())
            // Single-ticket routes
            .route(
                "/tickets/{id}",
                get(get_ticket::<T>)
                    .put(update_ticket::<T>)
                    .delete(delete_ticket::<T>),
            )
            .with_state(ticket_store);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be mounted on another
    /// application, optionally restricted to the given CORS origins.
    pub fn into_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the ticketing service as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!("Ticketera listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
