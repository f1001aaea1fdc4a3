pub mod use_cases;

pub use use_cases::{
    create_ticket::{CreateTicketError, CreateTicketUseCase},
    delete_ticket::{DeleteTicketError, DeleteTicketUseCase},
    get_ticket::{GetTicketError, GetTicketUseCase},
    list_tickets::{ListTicketsError, ListTicketsUseCase},
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
    update_ticket::{UpdateTicketError, UpdateTicketUseCase},
};
