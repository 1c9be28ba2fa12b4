// ============================================================================
// CREATE USER FLOW STATE - Visibilidad del modal de registro
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserFlowState {
    pub show_create_user_modal: bool,
}
