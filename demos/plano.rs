//! Map a study plan onto a document and print it in color.
//!
//! Run with `RUST_LOG=xmlbuild=trace` to see the mapper at work.

use tracing_subscriber::EnvFilter;
use xmlbuild::mapping::{FieldSchema, FieldValue, Mappable, Mapper, TypeSchema};
use xmlbuild::{Element, Error, XmlData};

struct Componente {
    nome: String,
    peso: u32,
}

impl Mappable for Componente {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "nome" => Some(FieldValue::scalar(&self.nome)),
            "peso" => Some(FieldValue::scalar(self.peso)),
            _ => None,
        }
    }
}

struct Fuc {
    codigo: String,
    nome: String,
    ects: f64,
    observacoes: String,
    avaliacao: Vec<Componente>,
}

impl Mappable for Fuc {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "codigo" => Some(FieldValue::scalar(&self.codigo)),
            "nome" => Some(FieldValue::scalar(&self.nome)),
            "ects" => Some(FieldValue::scalar(format!("{:.1}", self.ects))),
            "observacoes" => Some(FieldValue::scalar(&self.observacoes)),
            "avaliacao" => Some(FieldValue::sequence(&self.avaliacao)),
            _ => None,
        }
    }
}

struct Plano {
    curso: String,
    fucs: Vec<Fuc>,
}

impl Mappable for Plano {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "curso" => Some(FieldValue::scalar(&self.curso)),
            "fucs" => Some(FieldValue::sequence(&self.fucs)),
            _ => None,
        }
    }
}

/// Lift the components out of the `avaliacao` wrapper into the `fuc` itself.
fn flatten_avaliacao(data: &mut XmlData, fuc: Element) -> Result<Element, Error> {
    let wrapper = data.children(fuc).find(|child| data.name(*child) == "avaliacao");
    if let Some(wrapper) = wrapper {
        let componentes = data.children(wrapper).collect::<Vec<_>>();
        data.remove_child(fuc, wrapper);
        data.append_all(fuc, &componentes)?;
    }
    Ok(fuc)
}

fn componente(nome: &str, peso: u32) -> Componente {
    Componente {
        nome: nome.to_string(),
        peso,
    }
}

fn fuc(codigo: &str, nome: &str, ects: f64, avaliacao: Vec<Componente>) -> Fuc {
    Fuc {
        codigo: codigo.to_string(),
        nome: nome.to_string(),
        ects,
        observacoes: "la la...".to_string(),
        avaliacao,
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut mapper = Mapper::new();
    mapper
        .register(
            TypeSchema::of::<Componente>()
                .element_named("componente")
                .attribute("nome")
                .field(FieldSchema::attribute("peso").formatter("percent")),
        )
        .register(
            TypeSchema::of::<Fuc>()
                .element_named("fuc")
                .attribute("codigo")
                .element("nome")
                .element("ects")
                .exclude("observacoes")
                .element("avaliacao")
                .adapter("flatten"),
        )
        .register(
            TypeSchema::of::<Plano>()
                .element_named("plano")
                .element("curso")
                .element("fucs"),
        )
        .register_formatter("percent", |text: &str| format!("{text}%"))
        .register_adapter("flatten", flatten_avaliacao);

    let plano = Plano {
        curso: "Mestrado em Engenharia Informática".to_string(),
        fucs: vec![
            fuc(
                "M4310",
                "Programação Avançada",
                6.0,
                vec![componente("Quizzes", 20), componente("Projeto", 80)],
            ),
            fuc(
                "03782",
                "Dissertação",
                42.0,
                vec![
                    componente("Dissertação", 60),
                    componente("Apresentação", 20),
                    componente("Discussão", 20),
                ],
            ),
        ],
    };

    let mut data = XmlData::new();
    let doc = mapper.map_document(&mut data, &plano)?;
    print!("{}", doc.to_text(&data, true));
    Ok(())
}
