use std::cell::RefCell;
use std::io::Write;
use crate::brasil_api::model::Address;
use crate::controller::LookupState;

pub const TITLE: &str = "Localizador de CEP";
pub const SUBTITLE: &str = "Encontre endereços em todo o Brasil";
pub const PLACEHOLDER: &str = "Digite o CEP (somente números)";
pub const SUBMIT_LABEL: &str = "Buscar Endereço";
pub const BUSY_LABEL: &str = "Buscando...";
pub const ERROR_HEADING: &str = "Erro na busca";
pub const FALLBACK: &str = "Não disponível";

/// Receives a snapshot of the view state after every change.
pub trait Render {
    fn render(&self, state: &LookupState);

    /// called instead of [`render`](Render::render) when only `state.input` changed
    fn input_changed(&self, state: &LookupState) {
        self.render(state)
    }
}

impl<R: Render + ?Sized> Render for &R {
    fn render(&self, state: &LookupState) {
        (**self).render(state)
    }

    fn input_changed(&self, state: &LookupState) {
        (**self).input_changed(state)
    }
}

/// Plain-text presentation, one block per state change.
///
/// Input echoes are skipped: the terminal already shows what was typed.
pub struct TerminalRenderer<W: Write> {
    out: RefCell<W>,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_state(out: &mut W, state: &LookupState) -> std::io::Result<()> {
        if state.busy {
            writeln!(out, "{}", BUSY_LABEL)?;
        }
        if let Some(error) = &state.error {
            writeln!(out, "! {}", ERROR_HEADING)?;
            writeln!(out, "  {}", error)?;
        }
        if let Some(address) = &state.result {
            write_address(out, address)?;
        }
        out.flush()
    }
}

impl<W: Write> Render for TerminalRenderer<W> {
    fn render(&self, state: &LookupState) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = Self::write_state(&mut *out, state) {
            log::error!("cannot write to terminal: {:?}", e);
        }
    }

    fn input_changed(&self, _state: &LookupState) {}
}

fn write_address<W: Write>(out: &mut W, address: &Address) -> std::io::Result<()> {
    writeln!(out, "Endereço Encontrado")?;
    for (label, value) in address_lines(address) {
        writeln!(out, "  {:<11} {}", label, value)?;
    }
    Ok(())
}

/// label/value pairs of the address panel, with the fallback text applied
pub fn address_lines(address: &Address) -> [(&'static str, &str); 5] {
    fn show(field: &Option<String>) -> &str {
        Address::non_empty(field).unwrap_or(FALLBACK)
    }
    [
        ("CEP", show(&address.cep)),
        ("Logradouro", show(&address.street)),
        ("Bairro", show(&address.neighborhood)),
        ("Cidade", show(&address.city)),
        ("Estado", show(&address.state)),
    ]
}
