//! The fixed list of images to download.
//!
//! Order only affects processing and log order. Each label becomes the
//! output file name after [`slugify`](crate::naming::slugify).

/// A named image URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceEntry {
    pub label: &'static str,
    pub url: &'static str,
}

impl SourceEntry {
    pub const fn new(label: &'static str, url: &'static str) -> Self {
        Self { label, url }
    }
}

pub const IMAGE_SOURCES: &[SourceEntry] = &[
    SourceEntry::new("MAGDLENA", "https://i.postimg.cc/sg7D42jC/MAGDLENA.png"),
    SourceEntry::new("ABRAAO", "https://i.postimg.cc/k5zTwVVf/ABRAAO.png"),
    SourceEntry::new("ALEX", "https://i.postimg.cc/jjmMvWwT/ALEX.png"),
    SourceEntry::new("ALEX_B", "https://i.postimg.cc/gJhN7YRB/ALEX_B.png"),
    SourceEntry::new("ANDREJR", "https://i.postimg.cc/q7zm8c7g/ANDREJR.png"),
    SourceEntry::new("ARANHA", "https://i.postimg.cc/DZGBN2LV/ARANHA.png"),
    SourceEntry::new("BAHIA", "https://i.postimg.cc/Xq0QSTkv/BAHIA.png"),
    SourceEntry::new("BARBA", "https://i.postimg.cc/MH8d2hmV/BARBA.png"),
    SourceEntry::new("BILEU", "https://i.postimg.cc/tJH2QLNY/BILEU.png"),
    SourceEntry::new("BONINI", "https://i.postimg.cc/BbWVgmYr/BONINI.png"),
    SourceEntry::new("BRUNO", "https://i.postimg.cc/8PcZvQzS/BRUNO.png"),
    SourceEntry::new("CARIOCA", "https://i.postimg.cc/fy4rK826/CARIOCA.png"),
    SourceEntry::new("CARTOLA", "https://i.postimg.cc/wMKGVw4z/CARTOLA.png"),
    SourceEntry::new("NATAN", "https://i.postimg.cc/0yr0zpZS/NATAN.png"),
    SourceEntry::new("CL", "https://i.postimg.cc/wMKGVwf4/CL.png"),
    SourceEntry::new("CORUJA", "https://i.postimg.cc/tJhmmFw8/CORUJA.png"),
    SourceEntry::new("CRISTIANO", "https://i.postimg.cc/65kyj0WB/CRISTIANO.png"),
    SourceEntry::new("DG", "https://i.postimg.cc/fyxggY1N/DG.png"),
    SourceEntry::new("DIEGO", "https://i.postimg.cc/C5j66b9q/DIEGO.png"),
    SourceEntry::new("DIEGO_H", "https://i.postimg.cc/44tMdTy5/DIEGO_H.png"),
    SourceEntry::new("DVD", "https://i.postimg.cc/v89jBdTv/DVD.png"),
    SourceEntry::new("EVERTON", "https://i.postimg.cc/h4xwjqvs/EVERTON.png"),
    SourceEntry::new("FABIANO", "https://i.postimg.cc/zD0d3X56/FABIANO.png"),
    SourceEntry::new("FABINHO", "https://i.postimg.cc/9F0L95Q5/FABINHO.png"),
    SourceEntry::new("FERNANDO", "https://i.postimg.cc/PrJSDs5h/FERNANDO.png"),
    SourceEntry::new("GABRIEL_C", "https://i.postimg.cc/Kvj0TS8m/GABRIEL_C.png"),
    SourceEntry::new("GABRIEL_N", "https://i.postimg.cc/FszTS5Hs/GABRIEL_N.png"),
    SourceEntry::new("GABRIEL", "https://i.postimg.cc/kXGTS3g4/GABRIEL.png"),
    SourceEntry::new("GAGA", "https://i.postimg.cc/Kvj0TS84/GAGA.png"),
    SourceEntry::new("GUTE", "https://i.postimg.cc/fTy8dnRV/GUTE.png"),
    SourceEntry::new("HELCINHO", "https://i.postimg.cc/6pyp2hS3/HELCINHO.png"),
    SourceEntry::new("IHURI", "https://i.postimg.cc/5262YmG2/IHURI.png"),
    SourceEntry::new("ITALO", "https://i.postimg.cc/t4Y4ZzfC/ITALO.png"),
    SourceEntry::new("JACKSON", "https://i.postimg.cc/CLvKx2vR/JACKSON.png"),
    SourceEntry::new("JEFAO", "https://i.postimg.cc/RZNZ6T8J/JEFAO.png"),
    SourceEntry::new("JOAN", "https://i.postimg.cc/bwWNQtcR/JOAN.png"),
    SourceEntry::new("JOAO", "https://i.postimg.cc/GmVhkywf/JOAO.png"),
    SourceEntry::new("JONATHAN", "https://i.postimg.cc/K8wvnMSC/JONATHAN.png"),
    SourceEntry::new("JOTTA", "https://i.postimg.cc/0yF2pwRX/JOTTA.png"),
    SourceEntry::new("JUNINHO", "https://i.postimg.cc/T3FYrDvM/JUNINHO.png"),
    SourceEntry::new("JUNIOR", "https://i.postimg.cc/d0CQnVJt/JUNIOR.png"),
    SourceEntry::new("KLEVSON", "https://i.postimg.cc/XYd7kvjN/KLEVSON.png"),
    SourceEntry::new("LEOZINHO", "https://i.postimg.cc/vZfHtmYG/LEOZINHO.png"),
    SourceEntry::new("2S", "https://i.postimg.cc/jSbC9fk4/2S.png"),
    SourceEntry::new("MAGRAO", "https://i.postimg.cc/MpVKmG6K/MAGRAO.png"),
    SourceEntry::new("MALHEIRO", "https://i.postimg.cc/R0mCszhC/MALHEIRO.png"),
    SourceEntry::new("MARCELO", "https://i.postimg.cc/wBzxfdM1/MARCELO.png"),
    SourceEntry::new("MARCIO", "https://i.postimg.cc/k5CM1dGv/MARCIO.png"),
    SourceEntry::new("MARLLON", "https://i.postimg.cc/9F6r8pmX/MARLLON.png"),
    SourceEntry::new("MATHEUS", "https://i.postimg.cc/GpR371tJ/MATHEUS.png"),
    SourceEntry::new("MOREIRA", "https://i.postimg.cc/cJW19NCT/MOREIRA.png"),
    SourceEntry::new("NELSON", "https://i.postimg.cc/dVZP8N96/NELSON.png"),
    SourceEntry::new("NEVES", "https://i.postimg.cc/jdFYnYyW/NEVES.png"),
    SourceEntry::new("OBINA", "https://i.postimg.cc/htQW9Z0b/OBINA.png"),
    SourceEntry::new("OZIEL", "https://i.postimg.cc/fRSnxqv7/OZIEL.png"),
    SourceEntry::new("PHILL", "https://i.postimg.cc/K83Snp5q/PHILL.png"),
    SourceEntry::new("PQD", "https://i.postimg.cc/9F6r8pmF/PQD.png"),
    SourceEntry::new("RAFAEL", "https://i.postimg.cc/bJTKz7zv/RAFAEL.png"),
    SourceEntry::new("RANGEL", "https://i.postimg.cc/BbnRtm6Z/RANGEL.png"),
    SourceEntry::new("RAPHAEL", "https://i.postimg.cc/vTZCD0B6/RAPHAEL.png"),
    SourceEntry::new("RAPHAEL_D", "https://i.postimg.cc/YScc8NXP/RAPHAEL_D.png"),
    SourceEntry::new("REGIO", "https://i.postimg.cc/sxHqW5QZ/REGIO.png"),
    SourceEntry::new("RENATO", "https://i.postimg.cc/8P2DnVcX/RENATO.png"),
    SourceEntry::new("RODRIGUES", "https://i.postimg.cc/8P2DnVc2/RODRIGUES.png"),
    SourceEntry::new("RONALDO", "https://i.postimg.cc/fRYk69ys/RONALDO.png"),
    SourceEntry::new("SAPAO", "https://i.postimg.cc/ZKGZDh0k/SAPAO.png"),
    SourceEntry::new("SILLAS", "https://i.postimg.cc/WbBjfPzS/SILLAS.png"),
    SourceEntry::new("TANA", "https://i.postimg.cc/2SnYsXBR/TANA.png"),
    SourceEntry::new("TAPINHA", "https://i.postimg.cc/cLfWp584/TAPINHA.png"),
    SourceEntry::new("TETEU", "https://i.postimg.cc/P51HgF85/TETEU.png"),
    SourceEntry::new("TH", "https://i.postimg.cc/VkXwxHbs/TH.png"),
    SourceEntry::new("THIAGUINHO", "https://i.postimg.cc/Mp1wCrjv/THIAGUINHO.png"),
    SourceEntry::new("TRINDADE", "https://i.postimg.cc/vmMybLWv/TRINDADE.png"),
    SourceEntry::new("BERNARDO", "https://i.postimg.cc/W3ZXy2g3/BERNARDO.png"),
    SourceEntry::new("V_MARIN", "https://i.postimg.cc/mrR4BNQh/V_MARIN.png"),
    SourceEntry::new("WENDEL", "https://i.postimg.cc/zf5N8Sn0/WENDEL.png"),
    SourceEntry::new("YAGO", "https://i.postimg.cc/mrR4BNQM/YAGO.png"),
];
