//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default token lifetime in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 2;

/// Longest accepted token lifetime in hours (one year)
pub const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (SQLite file created on first use)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://clinic.db?mode=rwc";

// =============================================================================
// Response messages
// =============================================================================

pub const MSG_USER_REGISTERED: &str = "Usuário registrado com sucesso";
pub const MSG_PATIENT_CREATED: &str = "Paciente cadastrado com sucesso.";
pub const MSG_PROFESSIONAL_CREATED: &str = "Profissional de saúde cadastrado com sucesso.";
pub const MSG_CONSULTATION_CREATED: &str = "Consulta registrada com sucesso";
pub const MSG_RECORD_CREATED: &str = "Prontuário registrado com sucesso";

pub const MSG_PATIENT_NOT_FOUND: &str = "Paciente não encontrado";
pub const MSG_PROFESSIONAL_NOT_FOUND: &str = "Profissional não encontrado";
pub const MSG_CONSULTATION_NOT_FOUND: &str = "Consulta não encontrada";
pub const MSG_ROUTE_NOT_FOUND: &str = "Rota não encontrada";

pub const MSG_DUPLICATE_CPF: &str = "CPF já cadastrado";
pub const MSG_DUPLICATE_CRM: &str = "CRM já cadastrado";
pub const MSG_DUPLICATE_RECORD: &str = "Consulta já possui prontuário";

// =============================================================================
// Validation
// =============================================================================

/// Accepted input format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted input formats for consultation times
pub const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];
