use super::model::Room;

/// Builds the mansion map and returns the entrance hall.
pub fn mansion() -> Room {
    let quarto_principal =
        Room::new("Quarto Principal").with_right(Room::new("Banheiro Privativo"));

    let escritorio = Room::new("Escritorio")
        .with_left(Room::new("Biblioteca"))
        .with_right(quarto_principal);

    let sala_de_estar = Room::new("Sala de Estar")
        .with_left(escritorio)
        .with_right(Room::new("Sala de Jantar"));

    let jardim = Room::new("Jardim").with_left(Room::new("Piscina"));

    let cozinha = Room::new("Cozinha")
        .with_left(Room::new("Despensa"))
        .with_right(jardim);

    Room::new("Hall de Entrada")
        .with_left(sala_de_estar)
        .with_right(cozinha)
}
