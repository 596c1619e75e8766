use super::state::SortKey;

#[derive(Clone)]
pub enum Msg {
    SetAddress(String),
    SetHouse(String),
    SetApartament(String),
    SetSum(String),
    SetTelephone(String),
    SetFio(String),
    SetStatus(String),
    SetPayment(String),
    SetPaymentDate(String),
    AddDebtor,
    OpenRowMenu(i64),
    CloseRowMenu,
    OpenEditDialog,
    SaveEdit,
    CancelEdit,
    DeleteSelected,
    ToggleRow(i64),
    ToggleAllRows,
    SetPage(usize),
    SetPageSize(usize),
    SortBy(SortKey),
    Export,
    PickImportFile,
    ImportFileSelected(web_sys::File),
    ImportLoaded(String),
    ImportFailed,
}
